// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Portfolio-level aggregation of workflow results.

use crate::metrics::{WorkflowResult, break_even_count};
use serde::{Deserialize, Serialize};

/// Combined metrics across every countable workflow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombinedResults {
    /// Net value of one run of every workflow.
    pub combined_net_value: f64,
    /// Workflow sets needed to recover the period's platform cost.
    pub combined_break_even: u64,
    /// Whether any workflow supplied an annual volume.
    pub has_volumes: bool,
    /// Sum of known annual benefits.
    pub total_annual_benefit: Option<f64>,
    /// Annual benefit less the period's platform cost.
    pub net_annual_gain: Option<f64>,
    /// Net annual gain as a percentage of the period's platform cost.
    pub roi_percent: Option<f64>,
}

impl CombinedResults {
    /// The result for an empty workflow list.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            combined_net_value: 0.0,
            combined_break_even: 0,
            has_volumes: false,
            total_annual_benefit: None,
            net_annual_gain: None,
            roi_percent: None,
        }
    }
}

/// Aggregates per-workflow results into portfolio metrics.
///
/// The combined net value is a plain sum, not volume-weighted: one run of
/// every workflow is treated as a single billing unit. Workflows without a
/// volume are left out of the annual benefit rather than counted as zero.
///
/// # Arguments
///
/// * `results` - Results for the countable workflows
/// * `total_for_period` - Platform cost for the projection period
#[must_use]
pub fn combine_results(results: &[WorkflowResult], total_for_period: f64) -> CombinedResults {
    if results.is_empty() {
        return CombinedResults::empty();
    }

    let combined_net_value: f64 = results.iter().map(|r| r.net_value_per_interaction).sum();
    let combined_break_even: u64 = break_even_count(total_for_period, combined_net_value);

    let has_volumes: bool = results.iter().any(|r| r.annual_benefit.is_some());

    let total_annual_benefit: Option<f64> =
        has_volumes.then(|| results.iter().filter_map(|r| r.annual_benefit).sum());

    let net_annual_gain: Option<f64> = total_annual_benefit.map(|b| b - total_for_period);

    let roi_percent: Option<f64> = net_annual_gain
        .filter(|_| total_for_period > 0.0)
        .map(|gain| gain / total_for_period * 100.0);

    CombinedResults {
        combined_net_value,
        combined_break_even,
        has_volumes,
        total_annual_benefit,
        net_annual_gain,
        roi_percent,
    }
}
