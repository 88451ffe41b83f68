// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use dfd_roi_domain::{
    AiCostField, InteractionCostField, PlatformCostField, ServiceId, WorkflowDraft, WorkflowEdit,
    WorkflowId,
};

/// A command represents user intent as data only.
///
/// Commands are the only way to request scenario changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Set a scalar platform cost.
    SetPlatformCost {
        /// The field being edited.
        field: PlatformCostField,
        /// The new monthly amount.
        value: f64,
    },
    /// Set an AI consumption field.
    SetAiCost {
        /// The field being edited.
        field: AiCostField,
        /// The new value.
        value: f64,
    },
    /// Set the projection period.
    SetPeriodMonths {
        /// Period length in months. Must be positive.
        months: u32,
    },
    /// Append a third-party service line item.
    AddThirdPartyService {
        /// Service name.
        name: String,
        /// Monthly cost.
        monthly_cost: f64,
    },
    /// Remove a third-party service line item.
    RemoveThirdPartyService {
        /// The service to remove.
        id: ServiceId,
    },
    /// Rename a third-party service.
    RenameThirdPartyService {
        /// The service to rename.
        id: ServiceId,
        /// The new name.
        name: String,
    },
    /// Change the monthly cost of a third-party service.
    SetThirdPartyServiceCost {
        /// The service to edit.
        id: ServiceId,
        /// The new monthly cost.
        monthly_cost: f64,
    },
    /// Set a digital channel rate.
    SetInteractionCost {
        /// The rate being edited.
        field: InteractionCostField,
        /// The new unit rate.
        value: f64,
    },
    /// Set the staff hourly cost.
    SetStaffHourlyCost {
        /// Cost per hour.
        value: f64,
    },
    /// Set the postage and paper cost per letter.
    SetPostagePaperCost {
        /// Cost per letter.
        value: f64,
    },
    /// Append a workflow.
    AddWorkflow {
        /// Initial field values. `WorkflowDraft::default()` adds an empty row.
        draft: WorkflowDraft,
    },
    /// Remove a workflow.
    RemoveWorkflow {
        /// The workflow to remove.
        id: WorkflowId,
    },
    /// Edit one field of a workflow.
    UpdateWorkflow {
        /// The workflow to edit.
        id: WorkflowId,
        /// The edit to apply.
        edit: WorkflowEdit,
    },
    /// Replace the workflow list with the example set.
    LoadExampleWorkflows,
}

impl Command {
    /// Short name of the command, used in log events.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetPlatformCost { .. } => "SetPlatformCost",
            Self::SetAiCost { .. } => "SetAiCost",
            Self::SetPeriodMonths { .. } => "SetPeriodMonths",
            Self::AddThirdPartyService { .. } => "AddThirdPartyService",
            Self::RemoveThirdPartyService { .. } => "RemoveThirdPartyService",
            Self::RenameThirdPartyService { .. } => "RenameThirdPartyService",
            Self::SetThirdPartyServiceCost { .. } => "SetThirdPartyServiceCost",
            Self::SetInteractionCost { .. } => "SetInteractionCost",
            Self::SetStaffHourlyCost { .. } => "SetStaffHourlyCost",
            Self::SetPostagePaperCost { .. } => "SetPostagePaperCost",
            Self::AddWorkflow { .. } => "AddWorkflow",
            Self::RemoveWorkflow { .. } => "RemoveWorkflow",
            Self::UpdateWorkflow { .. } => "UpdateWorkflow",
            Self::LoadExampleWorkflows => "LoadExampleWorkflows",
        }
    }
}
