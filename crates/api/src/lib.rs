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
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
pub mod format;
mod handlers;
mod presentation;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    apply_commands, build_scenario, calculate_report, parse_scenario_request, render_report_json,
    report_for_scenario, scenario_commands, validate_request,
};
pub use presentation::{
    BreakdownRow, BreakdownTable, ImpactStatsView, NetAnnualGainCard, ReportViews, RoiShowcase,
    SummaryCards, monthly_break_even,
};
pub use request_response::{
    AiCostsRequest, CombinedResultsInfo, ImpactStatsInfo, InteractionCostsRequest,
    PlatformCostsRequest, PlatformTotalsInfo, RoiReportResponse, ScenarioRequest,
    ThirdPartyServiceRequest, WorkflowRequest, WorkflowResultInfo,
};
