// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod calculate;
mod combined;
mod command;
mod cost;
mod error;
mod evaluation;
mod impact;
mod metrics;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use calculate::{RoiCalculation, calculate};
pub use combined::{CombinedResults, combine_results};
pub use command::Command;
pub use cost::{PlatformTotals, aggregate_platform_costs};
pub use error::CoreError;
pub use evaluation::{WorkflowCost, digital_cost_per_flow, evaluate_workflow};
pub use impact::{ImpactStats, impact_stats};
pub use metrics::{WorkflowResult, break_even_count, compute_workflow_results, workflow_result};
pub use state::{Created, Scenario, TransitionResult};
