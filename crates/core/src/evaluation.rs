// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-execution cost evaluation of a single workflow.

use dfd_roi_domain::{HumanCosts, InteractionCosts, Workflow};
use serde::{Deserialize, Serialize};

/// What one execution of a workflow saves and what it costs to run digitally.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkflowCost {
    /// Staff hours removed by one execution.
    pub hours_removed: f64,
    /// Value of the staff time removed.
    pub labour_saving: f64,
    /// Postage and paper no longer spent on letters.
    pub material_saving: f64,
    /// Digital channel spend of one execution.
    pub digital_cost_per_flow: f64,
}

/// Digital channel spend of one execution of `workflow`.
#[must_use]
pub fn digital_cost_per_flow(workflow: &Workflow, rates: &InteractionCosts) -> f64 {
    f64::from(workflow.sms_per_flow) * rates.sms_per_segment_cost
        + f64::from(workflow.emails_per_flow) * rates.email_send_cost
        + f64::from(workflow.wx_connect_runs_per_flow) * rates.wx_connect_remote_run_cost
}

/// Evaluates the labour saving and digital cost of one workflow execution.
///
/// Letters only carry value when a postage rate has been configured; under
/// the default rate of zero they contribute nothing.
///
/// # Arguments
///
/// * `workflow` - The workflow to evaluate
/// * `rates` - Digital channel unit rates
/// * `human` - Staff and material rates
#[must_use]
pub fn evaluate_workflow(
    workflow: &Workflow,
    rates: &InteractionCosts,
    human: &HumanCosts,
) -> WorkflowCost {
    let hours_removed: f64 = workflow.minutes_removed / 60.0;

    WorkflowCost {
        hours_removed,
        labour_saving: hours_removed * human.staff_hourly_cost,
        material_saving: f64::from(workflow.letters_per_flow) * human.postage_paper_cost,
        digital_cost_per_flow: digital_cost_per_flow(workflow, rates),
    }
}
