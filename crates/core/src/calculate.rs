// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The full recomputation chain over a scenario.

use crate::combined::{CombinedResults, combine_results};
use crate::cost::{PlatformTotals, aggregate_platform_costs};
use crate::impact::{ImpactStats, impact_stats};
use crate::metrics::{WorkflowResult, compute_workflow_results};
use crate::state::Scenario;
use dfd_roi_domain::WorkflowId;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything derived from one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiCalculation {
    /// Platform cost totals.
    pub platform: PlatformTotals,
    /// One result per countable workflow, in input order.
    pub workflow_results: Vec<WorkflowResult>,
    /// Portfolio-level metrics.
    pub combined: CombinedResults,
    /// Headline impact figures, absent when no workflow counts.
    pub impact: Option<ImpactStats>,
    /// Workflows skipped for a blank name or zero minutes.
    pub excluded_workflows: Vec<WorkflowId>,
}

/// Recomputes every derived metric for `scenario`.
///
/// This is a pure function: calling it twice on the same scenario yields
/// identical results.
#[must_use]
pub fn calculate(scenario: &Scenario) -> RoiCalculation {
    let platform: PlatformTotals = aggregate_platform_costs(&scenario.platform_costs);

    let workflow_results: Vec<WorkflowResult> = compute_workflow_results(
        &scenario.workflows,
        &scenario.interaction_costs,
        &scenario.human_costs,
        platform.total_for_period,
    );

    let combined: CombinedResults = combine_results(&workflow_results, platform.total_for_period);
    let impact: Option<ImpactStats> = impact_stats(&workflow_results);

    let excluded_workflows: Vec<WorkflowId> = scenario
        .workflows
        .iter()
        .filter(|w| !w.is_countable())
        .map(|w| w.id)
        .collect();

    debug!(
        countable = workflow_results.len(),
        excluded = excluded_workflows.len(),
        total_for_period = platform.total_for_period,
        combined_break_even = combined.combined_break_even,
        "Recomputed ROI metrics"
    );

    RoiCalculation {
        platform,
        workflow_results,
        combined,
        impact,
        excluded_workflows,
    }
}
