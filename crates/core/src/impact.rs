// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Headline efficiency figures derived from the workflow results.

use crate::metrics::WorkflowResult;
use dfd_roi_domain::defaults::{BASELINE_MINUTES_PER_WORKFLOW, ERROR_REDUCTION_PERCENT};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Impact figures shown beneath the results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactStats {
    /// Share of labour cost eliminated once digital spend is paid, in percent.
    pub savings_percentage: i64,
    /// Minutes removed against the manual baseline, in percent.
    pub time_reduction_percentage: i64,
    /// Fixed platform error-reduction benchmark, in percent.
    pub error_reduction_percentage: u8,
    /// Average digital spend of one workflow execution.
    pub cost_per_interaction: f64,
}

/// Rounds half-way values toward positive infinity.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor().to_i64().unwrap_or(0)
}

/// Derives the impact figures, or `None` when there are no results.
///
/// The time reduction compares the minutes removed against a baseline of
/// 45 manual minutes per workflow.
#[must_use]
pub fn impact_stats(results: &[WorkflowResult]) -> Option<ImpactStats> {
    let count: f64 = results.len().to_f64().filter(|n| *n > 0.0)?;

    let total_labour: f64 = results.iter().map(|r| r.labour_saving).sum();
    let total_digital: f64 = results.iter().map(|r| r.digital_cost_per_flow).sum();
    let total_minutes: f64 = results.iter().map(|r| r.minutes_removed).sum();

    let savings_percentage: i64 = if total_labour > 0.0 {
        round_half_up((total_labour - total_digital) / total_labour * 100.0)
    } else {
        0
    };

    let baseline_minutes: f64 = count * BASELINE_MINUTES_PER_WORKFLOW;

    Some(ImpactStats {
        savings_percentage,
        time_reduction_percentage: round_half_up(total_minutes / baseline_minutes * 100.0),
        error_reduction_percentage: ERROR_REDUCTION_PERCENT,
        cost_per_interaction: total_digital / count,
    })
}
