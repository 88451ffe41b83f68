// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request handlers for the calculator.

use crate::error::{ApiError, translate_core_error};
use crate::presentation::ReportViews;
use crate::request_response::{
    CombinedResultsInfo, ImpactStatsInfo, PlatformTotalsInfo, RoiReportResponse,
    ScenarioRequest, WorkflowResultInfo,
};
use dfd_roi::{Command, RoiCalculation, Scenario, apply, calculate};
use dfd_roi_domain::{
    AiCostField, InteractionCostField, PlatformCostField, WorkflowId, validate_amount,
};
use tracing::{info, warn};

/// Parses a JSON scenario document.
///
/// # Errors
///
/// Returns `ApiError::Serialization` if the document is not a valid scenario.
pub fn parse_scenario_request(json: &str) -> Result<ScenarioRequest, ApiError> {
    Ok(serde_json::from_str(json)?)
}

/// Checks that every amount in a request is finite.
///
/// Runs before any command is built, since the edit boundary clamps
/// non-finite values to zero and would otherwise hide them.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` naming the first NaN or infinite field.
pub fn validate_request(request: &ScenarioRequest) -> Result<(), ApiError> {
    let platform = &request.platform_costs;
    let ai = &platform.ai_costs;
    let rates = &request.interaction_costs;

    let optional_fields: [(&str, Option<f64>); 12] = [
        ("platformCostPerMonth", platform.platform_cost_per_month),
        ("phoneLineMonthly", platform.phone_line_monthly),
        ("smsServiceMonthly", platform.sms_service_monthly),
        ("agentUnitsPerMonth", ai.agent_units_per_month),
        ("agentUnitPrice", ai.agent_unit_price),
        ("assistantUnitsPerMonth", ai.assistant_units_per_month),
        ("assistantUnitPrice", ai.assistant_unit_price),
        ("smsPerSegmentCost", rates.sms_per_segment_cost),
        ("wxConnectRemoteRunCost", rates.wx_connect_remote_run_cost),
        ("emailSendCost", rates.email_send_cost),
        ("staffHourlyCost", request.staff_hourly_cost),
        ("postagePaperCost", request.postage_paper_cost),
    ];
    for (field, value) in optional_fields {
        if let Some(value) = value {
            validate_amount(field, value)?;
        }
    }

    for (i, service) in platform.third_party_services.iter().enumerate() {
        validate_amount(
            &format!("thirdPartyServices[{i}].monthlyCost"),
            service.monthly_cost,
        )?;
    }
    for (i, workflow) in request.workflows.iter().enumerate() {
        validate_amount(
            &format!("workflows[{i}].minutesRemoved"),
            workflow.minutes_removed,
        )?;
    }

    Ok(())
}

/// Translates a request into the edit commands that build its scenario.
///
/// Commands are ordered so the result matches a user filling in the form
/// top to bottom: platform costs, channel rates, labour rates, then
/// workflows. When `loadExamples` is set the example set is loaded before
/// the request's own workflows are appended.
#[must_use]
pub fn scenario_commands(request: ScenarioRequest) -> Vec<Command> {
    let mut commands: Vec<Command> = Vec::new();
    let platform = request.platform_costs;

    let platform_fields: [(PlatformCostField, Option<f64>); 3] = [
        (
            PlatformCostField::PlatformCostPerMonth,
            platform.platform_cost_per_month,
        ),
        (PlatformCostField::PhoneLineMonthly, platform.phone_line_monthly),
        (PlatformCostField::SmsServiceMonthly, platform.sms_service_monthly),
    ];
    for (field, value) in platform_fields {
        if let Some(value) = value {
            commands.push(Command::SetPlatformCost { field, value });
        }
    }

    let ai = platform.ai_costs;
    let ai_fields: [(AiCostField, Option<f64>); 4] = [
        (AiCostField::AgentUnitsPerMonth, ai.agent_units_per_month),
        (AiCostField::AgentUnitPrice, ai.agent_unit_price),
        (AiCostField::AssistantUnitsPerMonth, ai.assistant_units_per_month),
        (AiCostField::AssistantUnitPrice, ai.assistant_unit_price),
    ];
    for (field, value) in ai_fields {
        if let Some(value) = value {
            commands.push(Command::SetAiCost { field, value });
        }
    }

    if let Some(months) = platform.period_months {
        commands.push(Command::SetPeriodMonths { months });
    }

    for service in platform.third_party_services {
        commands.push(Command::AddThirdPartyService {
            name: service.name,
            monthly_cost: service.monthly_cost,
        });
    }

    let rates = request.interaction_costs;
    let rate_fields: [(InteractionCostField, Option<f64>); 3] = [
        (InteractionCostField::SmsPerSegmentCost, rates.sms_per_segment_cost),
        (
            InteractionCostField::WxConnectRemoteRunCost,
            rates.wx_connect_remote_run_cost,
        ),
        (InteractionCostField::EmailSendCost, rates.email_send_cost),
    ];
    for (field, value) in rate_fields {
        if let Some(value) = value {
            commands.push(Command::SetInteractionCost { field, value });
        }
    }

    if let Some(value) = request.staff_hourly_cost {
        commands.push(Command::SetStaffHourlyCost { value });
    }
    if let Some(value) = request.postage_paper_cost {
        commands.push(Command::SetPostagePaperCost { value });
    }

    if request.load_examples {
        commands.push(Command::LoadExampleWorkflows);
    }
    for workflow in request.workflows {
        commands.push(Command::AddWorkflow {
            draft: workflow.into(),
        });
    }

    commands
}

/// Applies a sequence of commands, stopping at the first failure.
///
/// # Errors
///
/// Returns the translated error of the first command that fails.
pub fn apply_commands(
    scenario: &Scenario,
    commands: impl IntoIterator<Item = Command>,
) -> Result<Scenario, ApiError> {
    let mut current: Scenario = scenario.clone();
    for command in commands {
        current = apply(&current, command)
            .map_err(translate_core_error)?
            .new_scenario;
    }
    Ok(current)
}

/// Builds a scenario from a request.
///
/// Workflows that will not count toward the results are logged but kept,
/// so their ids remain stable for later edits.
///
/// # Arguments
///
/// * `request` - The submitted scenario
///
/// # Returns
///
/// * `Ok(Scenario)` on success
/// * `Err(ApiError)` if any value violates a domain rule
///
/// # Errors
///
/// Returns an error if:
/// - The period length is zero
/// - Any amount is NaN or infinite
pub fn build_scenario(request: ScenarioRequest) -> Result<Scenario, ApiError> {
    validate_request(&request)?;
    let scenario: Scenario = apply_commands(&Scenario::new(), scenario_commands(request))?;

    for workflow in scenario.workflows.iter().filter(|w| !w.is_countable()) {
        warn!(
            workflow_id = %workflow.id,
            name = %workflow.name,
            minutes_removed = workflow.minutes_removed,
            "Workflow excluded from calculation: needs a name and minutes removed"
        );
    }

    info!(
        workflows = scenario.workflows.len(),
        services = scenario.platform_costs.third_party_services.len(),
        period_months = scenario.platform_costs.period_months,
        "Built scenario"
    );

    Ok(scenario)
}

/// Calculates and renders the full report for a scenario.
#[must_use]
pub fn report_for_scenario(scenario: &Scenario) -> RoiReportResponse {
    let calculation: RoiCalculation = calculate(scenario);
    let views: ReportViews = ReportViews::build(&calculation, &scenario.interaction_costs);

    RoiReportResponse {
        platform: PlatformTotalsInfo::from(&calculation.platform),
        combined_unit_rate: scenario.interaction_costs.combined_unit_rate(),
        workflow_results: calculation
            .workflow_results
            .iter()
            .map(WorkflowResultInfo::from)
            .collect(),
        combined: CombinedResultsInfo::from(&calculation.combined),
        impact: calculation.impact.as_ref().map(ImpactStatsInfo::from),
        excluded_workflows: calculation
            .excluded_workflows
            .iter()
            .map(WorkflowId::value)
            .collect(),
        views,
    }
}

/// Builds a scenario from a request and reports on it.
///
/// # Errors
///
/// Returns an error if the request cannot be turned into a valid scenario.
pub fn calculate_report(request: ScenarioRequest) -> Result<RoiReportResponse, ApiError> {
    let scenario: Scenario = build_scenario(request)?;
    Ok(report_for_scenario(&scenario))
}

/// Serializes a report as pretty-printed JSON.
///
/// # Errors
///
/// Returns `ApiError::Serialization` if the report cannot be written.
pub fn render_report_json(report: &RoiReportResponse) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(report)?)
}
