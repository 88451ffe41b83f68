// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-workflow net value and break-even metrics.

use crate::evaluation::{WorkflowCost, evaluate_workflow};
use dfd_roi_domain::{HumanCosts, InteractionCosts, Workflow, countable_workflows};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Derived metrics for one countable workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowResult {
    /// The workflow name, as entered.
    pub name: String,
    /// Staff minutes removed per execution.
    pub minutes_removed: f64,
    /// Value of the staff time removed per execution.
    pub labour_saving: f64,
    /// Value of letters no longer sent per execution.
    pub material_saving: f64,
    /// Digital channel spend per execution.
    pub digital_cost_per_flow: f64,
    /// Savings minus digital spend. May be negative.
    pub net_value_per_interaction: f64,
    /// Executions needed to recover the period's platform cost.
    /// Zero when the workflow can never break even.
    pub break_even_interactions: u64,
    /// Net value over the annual volume, when a volume is known.
    pub annual_benefit: Option<f64>,
}

/// Number of whole interactions needed to recover `fixed_cost`.
///
/// Rounds up, since a partial interaction cannot offset fixed cost. Returns
/// zero when `net_value` is not positive or the quotient is not a usable
/// count.
#[must_use]
pub fn break_even_count(fixed_cost: f64, net_value: f64) -> u64 {
    if !net_value.is_finite() || net_value <= 0.0 {
        return 0;
    }

    let interactions: f64 = (fixed_cost / net_value).ceil();
    if !interactions.is_finite() || interactions <= 0.0 {
        return 0;
    }

    interactions.to_u64().unwrap_or(u64::MAX)
}

/// Derives the metrics for one workflow from its evaluated cost.
///
/// # Arguments
///
/// * `workflow` - The workflow being reported
/// * `cost` - Its per-execution evaluation
/// * `total_for_period` - Platform cost the workflow must recover
#[must_use]
pub fn workflow_result(
    workflow: &Workflow,
    cost: &WorkflowCost,
    total_for_period: f64,
) -> WorkflowResult {
    let net_value_per_interaction: f64 =
        cost.labour_saving + cost.material_saving - cost.digital_cost_per_flow;

    let annual_benefit: Option<f64> = workflow
        .annual_volume
        .as_ref()
        .and_then(ToPrimitive::to_f64)
        .map(|volume| net_value_per_interaction * volume);

    WorkflowResult {
        name: workflow.name.clone(),
        minutes_removed: workflow.minutes_removed,
        labour_saving: cost.labour_saving,
        material_saving: cost.material_saving,
        digital_cost_per_flow: cost.digital_cost_per_flow,
        net_value_per_interaction,
        break_even_interactions: break_even_count(total_for_period, net_value_per_interaction),
        annual_benefit,
    }
}

/// Evaluates every countable workflow, in input order.
///
/// Workflows with a blank name or no minutes removed are skipped entirely.
#[must_use]
pub fn compute_workflow_results(
    workflows: &[Workflow],
    rates: &InteractionCosts,
    human: &HumanCosts,
    total_for_period: f64,
) -> Vec<WorkflowResult> {
    countable_workflows(workflows)
        .map(|workflow| {
            let cost: WorkflowCost = evaluate_workflow(workflow, rates, human);
            workflow_result(workflow, &cost, total_for_period)
        })
        .collect()
}
