// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Platform cost aggregation.

use dfd_roi_domain::PlatformCosts;
use serde::{Deserialize, Serialize};

/// Monthly and period totals for the platform's recurring costs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformTotals {
    /// Sum of all third-party line items per month.
    pub third_party_monthly: f64,
    /// AI agent plus assistant spend per month.
    pub ai_monthly: f64,
    /// Every recurring cost per month.
    pub total_monthly: f64,
    /// `total_monthly` scaled by the period length.
    pub total_for_period: f64,
    /// The period length the totals were scaled by.
    pub period_months: u32,
}

/// Sums the recurring platform costs into monthly and period totals.
///
/// Inputs are summed as given. Negative amounts are not rejected here; they
/// are expected to have been clamped when they were entered.
///
/// # Arguments
///
/// * `costs` - The platform cost configuration
#[must_use]
pub fn aggregate_platform_costs(costs: &PlatformCosts) -> PlatformTotals {
    let third_party_monthly: f64 = costs
        .third_party_services
        .iter()
        .map(|s| s.monthly_cost)
        .sum();

    let ai_monthly: f64 = costs.ai_costs.agent_monthly() + costs.ai_costs.assistant_monthly();

    let total_monthly: f64 = costs.platform_cost_per_month
        + costs.phone_line_monthly
        + costs.sms_service_monthly
        + third_party_monthly
        + ai_monthly;

    PlatformTotals {
        third_party_monthly,
        ai_monthly,
        total_monthly,
        total_for_period: total_monthly * f64::from(costs.period_months),
        period_months: costs.period_months,
    }
}
