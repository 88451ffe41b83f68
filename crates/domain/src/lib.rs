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

pub mod defaults;
mod error;
pub mod input;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use defaults::{EXAMPLE_WORKFLOWS, ExampleWorkflow};
pub use error::DomainError;
pub use types::{
    AiCostField, AiCosts, HumanCosts, InteractionCostField, InteractionCosts, PlatformCostField,
    PlatformCosts, ServiceId, ThirdPartyService, Workflow, WorkflowDraft, WorkflowEdit, WorkflowId,
};
pub use validation::{countable_workflows, validate_amount, validate_period_months};
