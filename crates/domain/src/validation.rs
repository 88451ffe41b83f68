// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::Workflow;

/// Validates that a projection period covers at least one month.
///
/// # Arguments
///
/// * `months` - The period length to validate
///
/// # Errors
///
/// Returns `DomainError::InvalidPeriodMonths` if `months` is zero.
pub const fn validate_period_months(months: u32) -> Result<(), DomainError> {
    if months == 0 {
        return Err(DomainError::InvalidPeriodMonths { months });
    }
    Ok(())
}

/// Validates that a single amount is finite.
///
/// # Errors
///
/// Returns `DomainError::NonFiniteAmount` naming `field` if the value is
/// NaN or infinite.
pub fn validate_amount(field: &str, value: f64) -> Result<(), DomainError> {
    if !value.is_finite() {
        return Err(DomainError::NonFiniteAmount {
            field: String::from(field),
        });
    }
    Ok(())
}

/// Returns the workflows that qualify for evaluation, preserving order.
///
/// Workflows with a blank name or no minutes removed are skipped.
pub fn countable_workflows(workflows: &[Workflow]) -> impl Iterator<Item = &Workflow> {
    workflows.iter().filter(|w| w.is_countable())
}
