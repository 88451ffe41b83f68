// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Field names on the wire are camelCase. Every request field is optional;
//! omitted values keep the calculator defaults.

use crate::presentation::ReportViews;
use dfd_roi::{CombinedResults, ImpactStats, PlatformTotals, WorkflowResult};
use dfd_roi_domain::WorkflowDraft;
use serde::{Deserialize, Serialize};

// ========================================================================
// Request Types
// ========================================================================

/// A complete calculator scenario as submitted by a client.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScenarioRequest {
    /// Recurring platform costs.
    pub platform_costs: PlatformCostsRequest,
    /// Digital channel unit rates.
    pub interaction_costs: InteractionCostsRequest,
    /// Staff cost per hour.
    pub staff_hourly_cost: Option<f64>,
    /// Postage and paper cost per letter.
    pub postage_paper_cost: Option<f64>,
    /// Workflows to evaluate, appended after any examples.
    pub workflows: Vec<WorkflowRequest>,
    /// Seed the workflow list with the example set.
    pub load_examples: bool,
}

/// Platform cost overrides.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlatformCostsRequest {
    /// Platform subscription per month.
    pub platform_cost_per_month: Option<f64>,
    /// Telephony per month.
    pub phone_line_monthly: Option<f64>,
    /// SMS service subscription per month.
    pub sms_service_monthly: Option<f64>,
    /// Additional monthly line items.
    pub third_party_services: Vec<ThirdPartyServiceRequest>,
    /// AI consumption.
    pub ai_costs: AiCostsRequest,
    /// Projection period in months.
    pub period_months: Option<u32>,
}

/// A named monthly line item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThirdPartyServiceRequest {
    /// Display name.
    pub name: String,
    /// Monthly cost.
    pub monthly_cost: f64,
}

/// AI consumption overrides.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiCostsRequest {
    /// AI agent units per month.
    pub agent_units_per_month: Option<f64>,
    /// Price of one AI agent unit.
    pub agent_unit_price: Option<f64>,
    /// AI assistant units per month.
    pub assistant_units_per_month: Option<f64>,
    /// Price of one AI assistant unit.
    pub assistant_unit_price: Option<f64>,
}

/// Channel rate overrides.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InteractionCostsRequest {
    /// Cost per SMS segment.
    pub sms_per_segment_cost: Option<f64>,
    /// Cost per WX Connect remote run.
    pub wx_connect_remote_run_cost: Option<f64>,
    /// Cost per outbound email.
    pub email_send_cost: Option<f64>,
}

/// One workflow row.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkflowRequest {
    /// Workflow name. Blank names are excluded from the calculation.
    pub name: String,
    /// Staff minutes removed per execution.
    pub minutes_removed: f64,
    /// SMS segments per execution.
    pub sms_per_flow: u32,
    /// Emails per execution.
    pub emails_per_flow: u32,
    /// WX Connect runs per execution.
    pub wx_connect_runs_per_flow: u32,
    /// Letters no longer sent per execution.
    pub letters_per_flow: u32,
    /// Executions per year; `null` when unknown.
    pub annual_volume: Option<u64>,
}

impl From<WorkflowRequest> for WorkflowDraft {
    fn from(request: WorkflowRequest) -> Self {
        Self {
            name: request.name,
            minutes_removed: request.minutes_removed,
            sms_per_flow: request.sms_per_flow,
            emails_per_flow: request.emails_per_flow,
            wx_connect_runs_per_flow: request.wx_connect_runs_per_flow,
            letters_per_flow: request.letters_per_flow,
            annual_volume: request.annual_volume,
        }
    }
}

// ========================================================================
// Response Types
// ========================================================================

/// Platform cost totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformTotalsInfo {
    /// Sum of third-party line items per month.
    pub third_party_monthly: f64,
    /// AI spend per month.
    pub ai_monthly: f64,
    /// All recurring costs per month.
    pub total_monthly: f64,
    /// Monthly total scaled by the period.
    pub total_for_period: f64,
    /// Period length in months.
    pub period_months: u32,
}

impl From<&PlatformTotals> for PlatformTotalsInfo {
    fn from(totals: &PlatformTotals) -> Self {
        Self {
            third_party_monthly: totals.third_party_monthly,
            ai_monthly: totals.ai_monthly,
            total_monthly: totals.total_monthly,
            total_for_period: totals.total_for_period,
            period_months: totals.period_months,
        }
    }
}

/// Metrics for one workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowResultInfo {
    /// Workflow name.
    pub name: String,
    /// Minutes removed per execution.
    pub minutes_removed: f64,
    /// Labour value per execution.
    pub labour_saving: f64,
    /// Letter value per execution.
    pub material_saving: f64,
    /// Digital spend per execution.
    pub digital_cost_per_flow: f64,
    /// Net value per execution.
    pub net_value_per_interaction: f64,
    /// Executions to recover the period's platform cost.
    pub break_even_interactions: u64,
    /// Annual net value, when a volume is known.
    pub annual_benefit: Option<f64>,
}

impl From<&WorkflowResult> for WorkflowResultInfo {
    fn from(result: &WorkflowResult) -> Self {
        Self {
            name: result.name.clone(),
            minutes_removed: result.minutes_removed,
            labour_saving: result.labour_saving,
            material_saving: result.material_saving,
            digital_cost_per_flow: result.digital_cost_per_flow,
            net_value_per_interaction: result.net_value_per_interaction,
            break_even_interactions: result.break_even_interactions,
            annual_benefit: result.annual_benefit,
        }
    }
}

/// Portfolio-level metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedResultsInfo {
    /// Net value of one run of every workflow.
    pub combined_net_value: f64,
    /// Workflow sets needed to break even.
    pub combined_break_even: u64,
    /// Whether any workflow had a volume.
    pub has_volumes: bool,
    /// Sum of known annual benefits.
    pub total_annual_benefit: Option<f64>,
    /// Annual benefit less the period's platform cost.
    pub net_annual_gain: Option<f64>,
    /// Return on the period's platform cost, in percent.
    pub roi_percent: Option<f64>,
}

impl From<&CombinedResults> for CombinedResultsInfo {
    fn from(combined: &CombinedResults) -> Self {
        Self {
            combined_net_value: combined.combined_net_value,
            combined_break_even: combined.combined_break_even,
            has_volumes: combined.has_volumes,
            total_annual_benefit: combined.total_annual_benefit,
            net_annual_gain: combined.net_annual_gain,
            roi_percent: combined.roi_percent,
        }
    }
}

/// Headline impact figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactStatsInfo {
    /// Labour cost eliminated net of digital spend, in percent.
    pub savings_percentage: i64,
    /// Minutes removed against the manual baseline, in percent.
    pub time_reduction_percentage: i64,
    /// Error-reduction benchmark, in percent.
    pub error_reduction_percentage: u8,
    /// Average digital spend per execution.
    pub cost_per_interaction: f64,
}

impl From<&ImpactStats> for ImpactStatsInfo {
    fn from(stats: &ImpactStats) -> Self {
        Self {
            savings_percentage: stats.savings_percentage,
            time_reduction_percentage: stats.time_reduction_percentage,
            error_reduction_percentage: stats.error_reduction_percentage,
            cost_per_interaction: stats.cost_per_interaction,
        }
    }
}

/// API response carrying every derived figure and its rendered form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiReportResponse {
    /// Platform cost totals.
    pub platform: PlatformTotalsInfo,
    /// Sum of one unit of every digital channel.
    pub combined_unit_rate: f64,
    /// Per-workflow metrics, in input order.
    pub workflow_results: Vec<WorkflowResultInfo>,
    /// Portfolio metrics.
    pub combined: CombinedResultsInfo,
    /// Impact figures; absent when no workflow counts.
    pub impact: Option<ImpactStatsInfo>,
    /// Ids of workflows skipped for a blank name or zero minutes.
    pub excluded_workflows: Vec<u64>,
    /// Display-ready strings for every report section.
    pub views: ReportViews,
}
