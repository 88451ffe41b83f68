// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{Created, Scenario, TransitionResult};
use dfd_roi_domain::input::clamp_amount;
use dfd_roi_domain::{
    DomainError, EXAMPLE_WORKFLOWS, ThirdPartyService, Workflow, WorkflowEdit, WorkflowId,
    validate_period_months,
};
use tracing::debug;

/// Clamps the numeric payload of a workflow edit to the edit-boundary rules.
fn clamp_edit(edit: WorkflowEdit) -> WorkflowEdit {
    match edit {
        WorkflowEdit::MinutesRemoved(minutes) => WorkflowEdit::MinutesRemoved(clamp_amount(minutes)),
        other => other,
    }
}

/// Applies a command to a scenario, producing a new scenario.
///
/// Monetary values and minutes are clamped to finite, non-negative amounts
/// on the way in. The input scenario is never modified.
///
/// # Arguments
///
/// * `scenario` - The current scenario (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new scenario and any created ids
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The period length is zero
/// - The referenced workflow or third-party service does not exist
#[allow(clippy::too_many_lines)]
pub fn apply(scenario: &Scenario, command: Command) -> Result<TransitionResult, CoreError> {
    let name: &'static str = command.name();
    let mut next: Scenario = scenario.clone();
    let mut created: Vec<Created> = Vec::new();

    match command {
        Command::SetPlatformCost { field, value } => {
            next.platform_costs.set_field(field, clamp_amount(value));
        }
        Command::SetAiCost { field, value } => {
            next.platform_costs.set_ai_field(field, clamp_amount(value));
        }
        Command::SetPeriodMonths { months } => {
            validate_period_months(months)?;
            next.platform_costs.period_months = months;
        }
        Command::AddThirdPartyService { name, monthly_cost } => {
            let id = next.allocate_service_id();
            next.platform_costs
                .third_party_services
                .push(ThirdPartyService {
                    id,
                    name,
                    monthly_cost: clamp_amount(monthly_cost),
                });
            created.push(Created::Service(id));
        }
        Command::RemoveThirdPartyService { id } => {
            let services = &mut next.platform_costs.third_party_services;
            let before: usize = services.len();
            services.retain(|s| s.id != id);
            if services.len() == before {
                return Err(DomainError::ServiceNotFound(id).into());
            }
        }
        Command::RenameThirdPartyService { id, name } => {
            let service = next
                .platform_costs
                .service_mut(id)
                .ok_or(DomainError::ServiceNotFound(id))?;
            service.name = name;
        }
        Command::SetThirdPartyServiceCost { id, monthly_cost } => {
            let service = next
                .platform_costs
                .service_mut(id)
                .ok_or(DomainError::ServiceNotFound(id))?;
            service.monthly_cost = clamp_amount(monthly_cost);
        }
        Command::SetInteractionCost { field, value } => {
            next.interaction_costs.set_field(field, clamp_amount(value));
        }
        Command::SetStaffHourlyCost { value } => {
            next.human_costs.staff_hourly_cost = clamp_amount(value);
        }
        Command::SetPostagePaperCost { value } => {
            next.human_costs.postage_paper_cost = clamp_amount(value);
        }
        Command::AddWorkflow { mut draft } => {
            draft.minutes_removed = clamp_amount(draft.minutes_removed);
            let id: WorkflowId = next.allocate_workflow_id();
            next.workflows.push(draft.into_workflow(id));
            created.push(Created::Workflow(id));
        }
        Command::RemoveWorkflow { id } => {
            let before: usize = next.workflows.len();
            next.workflows.retain(|w| w.id != id);
            if next.workflows.len() == before {
                return Err(DomainError::WorkflowNotFound(id).into());
            }
        }
        Command::UpdateWorkflow { id, edit } => {
            let workflow: &mut Workflow = next
                .workflow_mut(id)
                .ok_or(DomainError::WorkflowNotFound(id))?;
            workflow.apply_edit(clamp_edit(edit));
        }
        Command::LoadExampleWorkflows => {
            let mut examples: Vec<Workflow> = Vec::with_capacity(EXAMPLE_WORKFLOWS.len());
            for example in &EXAMPLE_WORKFLOWS {
                let id: WorkflowId = next.allocate_workflow_id();
                examples.push(example.to_workflow(id));
                created.push(Created::Workflow(id));
            }
            next.workflows = examples;
        }
    }

    debug!(
        command = name,
        workflows = next.workflows.len(),
        services = next.platform_costs.third_party_services.len(),
        "Applied scenario command"
    );

    Ok(TransitionResult {
        new_scenario: next,
        created,
    })
}
