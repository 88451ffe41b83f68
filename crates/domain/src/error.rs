// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{ServiceId, WorkflowId};

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The cost period must cover at least one month.
    InvalidPeriodMonths {
        /// The rejected period length.
        months: u32,
    },
    /// A monetary or rate field holds NaN or an infinity.
    NonFiniteAmount {
        /// The name of the offending field.
        field: String,
    },
    /// No workflow with the given id exists in the scenario.
    WorkflowNotFound(WorkflowId),
    /// No third-party service with the given id exists in the scenario.
    ServiceNotFound(ServiceId),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPeriodMonths { months } => {
                write!(
                    f,
                    "Invalid period length: {months} months. Must be at least 1"
                )
            }
            Self::NonFiniteAmount { field } => {
                write!(f, "Amount for '{field}' must be a finite number")
            }
            Self::WorkflowNotFound(id) => write!(f, "Workflow {id} not found"),
            Self::ServiceNotFound(id) => write!(f, "Third-party service {id} not found"),
        }
    }
}

impl std::error::Error for DomainError {}
