// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::defaults;
use serde::{Deserialize, Serialize};

/// Identifier of a workflow within a scenario.
///
/// Identifiers are assigned on creation and never reused within a scenario.
/// They render as `wf-N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkflowId(u64);

impl WorkflowId {
    /// Creates a workflow identifier from its sequence number.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the sequence number.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for WorkflowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "wf-{}", self.0)
    }
}

/// Identifier of a third-party service line item. Renders as `svc-N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(u64);

impl ServiceId {
    /// Creates a service identifier from its sequence number.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the sequence number.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ServiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "svc-{}", self.0)
    }
}

/// An additional monthly service billed alongside the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThirdPartyService {
    /// Unique identifier within the platform costs.
    pub id: ServiceId,
    /// Free-text vendor or service name.
    pub name: String,
    /// Monthly cost of the service.
    pub monthly_cost: f64,
}

impl ThirdPartyService {
    /// Creates an unnamed service with no cost.
    #[must_use]
    pub const fn empty(id: ServiceId) -> Self {
        Self {
            id,
            name: String::new(),
            monthly_cost: 0.0,
        }
    }
}

/// Monthly AI agent and assistant consumption.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AiCosts {
    /// AI agent units consumed per month.
    pub agent_units_per_month: f64,
    /// Price of one AI agent unit.
    pub agent_unit_price: f64,
    /// AI assistant units consumed per month.
    pub assistant_units_per_month: f64,
    /// Price of one AI assistant unit.
    pub assistant_unit_price: f64,
}

impl AiCosts {
    /// Monthly spend on AI agent units.
    #[must_use]
    pub fn agent_monthly(&self) -> f64 {
        self.agent_units_per_month * self.agent_unit_price
    }

    /// Monthly spend on AI assistant units.
    #[must_use]
    pub fn assistant_monthly(&self) -> f64 {
        self.assistant_units_per_month * self.assistant_unit_price
    }
}

impl Default for AiCosts {
    fn default() -> Self {
        Self {
            agent_units_per_month: 0.0,
            agent_unit_price: defaults::AI_AGENT_UNIT_PRICE,
            assistant_units_per_month: 0.0,
            assistant_unit_price: defaults::AI_ASSISTANT_UNIT_PRICE,
        }
    }
}

/// Scalar platform cost fields that can be edited individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlatformCostField {
    /// Platform subscription per month.
    PlatformCostPerMonth,
    /// Telephony line rental and usage per month.
    PhoneLineMonthly,
    /// SMS service subscription per month.
    SmsServiceMonthly,
}

/// AI consumption fields that can be edited individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiCostField {
    /// AI agent units consumed per month.
    AgentUnitsPerMonth,
    /// Price of one AI agent unit.
    AgentUnitPrice,
    /// AI assistant units consumed per month.
    AssistantUnitsPerMonth,
    /// Price of one AI assistant unit.
    AssistantUnitPrice,
}

/// Recurring platform cost configuration.
///
/// All amounts are monthly. The period length scales the monthly total into
/// the fixed cost that workflows must recover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformCosts {
    /// Platform subscription per month.
    pub platform_cost_per_month: f64,
    /// Telephony line rental and usage per month.
    pub phone_line_monthly: f64,
    /// SMS service subscription per month.
    pub sms_service_monthly: f64,
    /// Additional monthly line items, in entry order.
    pub third_party_services: Vec<ThirdPartyService>,
    /// AI consumption.
    pub ai_costs: AiCosts,
    /// Number of months the totals are projected over.
    pub period_months: u32,
}

impl PlatformCosts {
    /// Returns the value of a scalar cost field.
    #[must_use]
    pub const fn field(&self, field: PlatformCostField) -> f64 {
        match field {
            PlatformCostField::PlatformCostPerMonth => self.platform_cost_per_month,
            PlatformCostField::PhoneLineMonthly => self.phone_line_monthly,
            PlatformCostField::SmsServiceMonthly => self.sms_service_monthly,
        }
    }

    /// Sets the value of a scalar cost field.
    pub const fn set_field(&mut self, field: PlatformCostField, value: f64) {
        match field {
            PlatformCostField::PlatformCostPerMonth => self.platform_cost_per_month = value,
            PlatformCostField::PhoneLineMonthly => self.phone_line_monthly = value,
            PlatformCostField::SmsServiceMonthly => self.sms_service_monthly = value,
        }
    }

    /// Sets the value of an AI consumption field.
    pub const fn set_ai_field(&mut self, field: AiCostField, value: f64) {
        let ai: &mut AiCosts = &mut self.ai_costs;
        match field {
            AiCostField::AgentUnitsPerMonth => ai.agent_units_per_month = value,
            AiCostField::AgentUnitPrice => ai.agent_unit_price = value,
            AiCostField::AssistantUnitsPerMonth => ai.assistant_units_per_month = value,
            AiCostField::AssistantUnitPrice => ai.assistant_unit_price = value,
        }
    }

    /// Looks up a third-party service by id.
    #[must_use]
    pub fn service(&self, id: ServiceId) -> Option<&ThirdPartyService> {
        self.third_party_services.iter().find(|s| s.id == id)
    }

    /// Looks up a third-party service by id for editing.
    pub fn service_mut(&mut self, id: ServiceId) -> Option<&mut ThirdPartyService> {
        self.third_party_services.iter_mut().find(|s| s.id == id)
    }
}

impl Default for PlatformCosts {
    fn default() -> Self {
        Self {
            platform_cost_per_month: 0.0,
            phone_line_monthly: 0.0,
            sms_service_monthly: 0.0,
            third_party_services: Vec::new(),
            ai_costs: AiCosts::default(),
            period_months: defaults::PERIOD_MONTHS,
        }
    }
}

/// Digital channel rates that can be edited individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionCostField {
    /// Cost per SMS segment.
    SmsPerSegmentCost,
    /// Cost per WX Connect remote run.
    WxConnectRemoteRunCost,
    /// Cost per outbound email.
    EmailSendCost,
}

/// Per-unit digital channel rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionCosts {
    /// Cost per SMS segment sent.
    pub sms_per_segment_cost: f64,
    /// Cost per WX Connect remote run.
    pub wx_connect_remote_run_cost: f64,
    /// Cost per outbound email sent.
    pub email_send_cost: f64,
}

impl InteractionCosts {
    /// Sum of one unit of every channel.
    #[must_use]
    pub fn combined_unit_rate(&self) -> f64 {
        self.sms_per_segment_cost + self.wx_connect_remote_run_cost + self.email_send_cost
    }

    /// Sets the value of a single rate.
    pub const fn set_field(&mut self, field: InteractionCostField, value: f64) {
        match field {
            InteractionCostField::SmsPerSegmentCost => self.sms_per_segment_cost = value,
            InteractionCostField::WxConnectRemoteRunCost => self.wx_connect_remote_run_cost = value,
            InteractionCostField::EmailSendCost => self.email_send_cost = value,
        }
    }
}

impl Default for InteractionCosts {
    fn default() -> Self {
        Self {
            sms_per_segment_cost: defaults::SMS_PER_SEGMENT_COST,
            wx_connect_remote_run_cost: defaults::WX_CONNECT_REMOTE_RUN_COST,
            email_send_cost: defaults::EMAIL_SEND_COST,
        }
    }
}

/// Human-side costs eliminated by automation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HumanCosts {
    /// Fully-loaded staff labour cost per hour.
    pub staff_hourly_cost: f64,
    /// Postage and printing cost per letter no longer sent.
    ///
    /// Defaults to zero, so letters carry no value until a rate is configured.
    pub postage_paper_cost: f64,
}

impl Default for HumanCosts {
    fn default() -> Self {
        Self {
            staff_hourly_cost: defaults::STAFF_HOURLY_COST,
            postage_paper_cost: defaults::POSTAGE_PAPER_COST,
        }
    }
}

/// One automatable patient-interaction process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    /// Unique identifier within the scenario.
    pub id: WorkflowId,
    /// Free-text workflow name.
    pub name: String,
    /// Staff minutes removed by one execution.
    pub minutes_removed: f64,
    /// SMS segments sent per execution.
    pub sms_per_flow: u32,
    /// Emails sent per execution.
    pub emails_per_flow: u32,
    /// WX Connect remote runs per execution.
    pub wx_connect_runs_per_flow: u32,
    /// Physical letters no longer sent per execution.
    pub letters_per_flow: u32,
    /// Executions per year, if known.
    pub annual_volume: Option<u64>,
}

impl Workflow {
    /// Creates an unnamed workflow with no time saving or channel usage.
    #[must_use]
    pub const fn empty(id: WorkflowId) -> Self {
        Self {
            id,
            name: String::new(),
            minutes_removed: 0.0,
            sms_per_flow: 0,
            emails_per_flow: 0,
            wx_connect_runs_per_flow: 0,
            letters_per_flow: 0,
            annual_volume: None,
        }
    }

    /// Returns whether the workflow qualifies for evaluation.
    ///
    /// A workflow counts only when its trimmed name is non-empty and it
    /// removes a positive number of minutes.
    #[must_use]
    pub fn is_countable(&self) -> bool {
        !self.name.trim().is_empty() && self.minutes_removed > 0.0
    }

    /// Applies a single field edit.
    pub fn apply_edit(&mut self, edit: WorkflowEdit) {
        match edit {
            WorkflowEdit::Name(name) => self.name = name,
            WorkflowEdit::MinutesRemoved(minutes) => self.minutes_removed = minutes,
            WorkflowEdit::SmsPerFlow(count) => self.sms_per_flow = count,
            WorkflowEdit::EmailsPerFlow(count) => self.emails_per_flow = count,
            WorkflowEdit::WxConnectRunsPerFlow(count) => self.wx_connect_runs_per_flow = count,
            WorkflowEdit::LettersPerFlow(count) => self.letters_per_flow = count,
            WorkflowEdit::AnnualVolume(volume) => self.annual_volume = volume,
        }
    }
}

/// The editable fields of a workflow that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkflowDraft {
    /// Free-text workflow name.
    pub name: String,
    /// Staff minutes removed by one execution.
    pub minutes_removed: f64,
    /// SMS segments sent per execution.
    pub sms_per_flow: u32,
    /// Emails sent per execution.
    pub emails_per_flow: u32,
    /// WX Connect remote runs per execution.
    pub wx_connect_runs_per_flow: u32,
    /// Physical letters no longer sent per execution.
    pub letters_per_flow: u32,
    /// Executions per year, if known.
    pub annual_volume: Option<u64>,
}

impl WorkflowDraft {
    /// Assigns an id, producing a workflow.
    #[must_use]
    pub fn into_workflow(self, id: WorkflowId) -> Workflow {
        Workflow {
            id,
            name: self.name,
            minutes_removed: self.minutes_removed,
            sms_per_flow: self.sms_per_flow,
            emails_per_flow: self.emails_per_flow,
            wx_connect_runs_per_flow: self.wx_connect_runs_per_flow,
            letters_per_flow: self.letters_per_flow,
            annual_volume: self.annual_volume,
        }
    }
}

/// A single-field edit to a workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkflowEdit {
    /// Replace the name.
    Name(String),
    /// Replace the minutes removed.
    MinutesRemoved(f64),
    /// Replace the SMS count.
    SmsPerFlow(u32),
    /// Replace the email count.
    EmailsPerFlow(u32),
    /// Replace the WX Connect run count.
    WxConnectRunsPerFlow(u32),
    /// Replace the letter count.
    LettersPerFlow(u32),
    /// Replace or clear the annual volume.
    AnnualVolume(Option<u64>),
}
