// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Display models for each section of the ROI report.
//!
//! Views hold only rendered strings and visibility decisions. All numbers
//! come from an [`RoiCalculation`]; nothing here recomputes a metric.

use crate::format::{
    format_combined_unit_rate, format_count, format_currency, format_minutes,
    format_multiplier, format_optional_currency, format_percent, format_signed_percent, to_fixed,
};
use dfd_roi::{CombinedResults, ImpactStats, RoiCalculation, WorkflowResult};
use dfd_roi_domain::InteractionCosts;
use serde::{Deserialize, Serialize};

/// Placeholder impact figures shown before any workflow counts.
const PLACEHOLDER_SAVINGS_PERCENTAGE: i64 = 42;
const PLACEHOLDER_TIME_REDUCTION_PERCENTAGE: i64 = 68;
const PLACEHOLDER_ERROR_REDUCTION_PERCENTAGE: u8 = 85;
const PLACEHOLDER_COST_PER_INTERACTION: f64 = 12.50;

/// Number of workflow sets needed per month to break even.
///
/// A zero-length period is treated as one month.
#[must_use]
pub fn monthly_break_even(combined_break_even: u64, period_months: u32) -> u64 {
    combined_break_even.div_ceil(u64::from(period_months.max(1)))
}

/// The net annual gain card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetAnnualGainCard {
    /// Rendered gain.
    pub value: String,
    /// Caption naming the platform cost the gain is net of.
    pub caption: String,
}

/// Headline figures above the breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCards {
    /// Workflow sets per period to break even.
    pub annual_break_even: String,
    /// Workflow sets per month to break even.
    pub monthly_break_even: String,
    /// Combined net value of one run of every workflow.
    pub net_value_per_interaction: String,
    /// Present only when some workflow has a volume.
    pub net_annual_gain: Option<NetAnnualGainCard>,
    /// Present only when an ROI could be computed.
    pub roi_percent: Option<String>,
}

impl SummaryCards {
    /// Builds the summary cards.
    ///
    /// # Arguments
    ///
    /// * `combined` - Portfolio metrics
    /// * `total_for_period` - Platform cost for the period
    /// * `period_months` - Period length, used for the monthly figure
    #[must_use]
    pub fn build(combined: &CombinedResults, total_for_period: f64, period_months: u32) -> Self {
        let net_annual_gain: Option<NetAnnualGainCard> = combined
            .net_annual_gain
            .filter(|_| combined.has_volumes && combined.total_annual_benefit.is_some())
            .map(|gain| NetAnnualGainCard {
                value: format_currency(gain),
                caption: format!("after {} platform cost", format_currency(total_for_period)),
            });

        let roi_percent: Option<String> = combined
            .roi_percent
            .filter(|_| combined.has_volumes)
            .map(|roi| format_percent(roi, 1));

        Self {
            annual_break_even: format_count(combined.combined_break_even),
            monthly_break_even: format_count(monthly_break_even(
                combined.combined_break_even,
                period_months,
            )),
            net_value_per_interaction: format_currency(combined.combined_net_value),
            net_annual_gain,
            roi_percent,
        }
    }
}

/// One rendered row of the per-workflow breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownRow {
    /// Workflow name; `Total` on the footer.
    pub name: String,
    /// Minutes saved.
    pub minutes_saved: String,
    /// Manual process saving.
    pub labour_saving: String,
    /// Digital channel cost.
    pub digital_cost: String,
    /// Net value per execution.
    pub net_value: String,
    /// Break-even executions.
    pub break_even: String,
    /// Annual benefit; `None` when the column is hidden.
    pub annual_benefit: Option<String>,
}

/// The per-workflow breakdown with its totals footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownTable {
    /// Whether the annual benefit column is shown.
    pub show_annual_benefit: bool,
    /// One row per countable workflow.
    pub rows: Vec<BreakdownRow>,
    /// Column totals.
    pub totals: BreakdownRow,
}

impl BreakdownTable {
    /// Builds the breakdown from the workflow results.
    #[must_use]
    pub fn build(results: &[WorkflowResult], combined: &CombinedResults) -> Self {
        let show_annual_benefit: bool = combined.has_volumes;
        let benefit_cell =
            |value: Option<f64>| show_annual_benefit.then(|| format_optional_currency(value));

        let rows: Vec<BreakdownRow> = results
            .iter()
            .map(|r| BreakdownRow {
                name: r.name.clone(),
                minutes_saved: format_minutes(r.minutes_removed),
                labour_saving: format_currency(r.labour_saving),
                digital_cost: format_currency(r.digital_cost_per_flow),
                net_value: format_currency(r.net_value_per_interaction),
                break_even: format_count(r.break_even_interactions),
                annual_benefit: benefit_cell(r.annual_benefit),
            })
            .collect();

        let total_minutes: f64 = results.iter().fold(0.0, |sum, r| sum + r.minutes_removed);
        let total_labour: f64 = results.iter().fold(0.0, |sum, r| sum + r.labour_saving);
        let total_digital: f64 = results
            .iter()
            .fold(0.0, |sum, r| sum + r.digital_cost_per_flow);

        let totals: BreakdownRow = BreakdownRow {
            name: String::from("Total"),
            minutes_saved: format_minutes(total_minutes),
            labour_saving: format_currency(total_labour),
            digital_cost: format_currency(total_digital),
            net_value: format_currency(combined.combined_net_value),
            break_even: format_count(combined.combined_break_even),
            annual_benefit: benefit_cell(combined.total_annual_benefit),
        };

        Self {
            show_annual_benefit,
            rows,
            totals,
        }
    }
}

/// The ROI highlight shown once an ROI is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiShowcase {
    /// Whole-number ROI with a `+` on gains.
    pub roi_percent: String,
    /// Net annual gain.
    pub net_annual_savings: String,
    /// Platform cost for the period.
    pub platform_investment: String,
    /// Multiple of the investment returned.
    pub return_multiplier: String,
    /// Whether the net annual gain is positive.
    pub is_positive_roi: bool,
    /// Value statements, present only on a positive ROI.
    pub value_propositions: Vec<String>,
}

impl RoiShowcase {
    /// Builds the showcase, or `None` unless volumes exist and both the
    /// ROI and the net annual gain are known.
    #[must_use]
    pub fn build(
        results: &[WorkflowResult],
        combined: &CombinedResults,
        total_for_period: f64,
    ) -> Option<Self> {
        if !combined.has_volumes {
            return None;
        }
        let roi: f64 = combined.roi_percent?;
        let gain: f64 = combined.net_annual_gain?;

        let is_positive_roi: bool = gain > 0.0;
        let value_propositions: Vec<String> = if is_positive_roi {
            let total_minutes: f64 = results.iter().fold(0.0, |sum, r| sum + r.minutes_removed);
            vec![
                format!(
                    "Break-even in just {} interactions",
                    format_count(combined.combined_break_even)
                ),
                format!(
                    "{} saved per interaction set",
                    format_currency(combined.combined_net_value)
                ),
                format!("{total_minutes} minutes saved per patient journey"),
                format!("{} net gain in year 1", format_currency(gain)),
            ]
        } else {
            Vec::new()
        };

        Some(Self {
            roi_percent: format_signed_percent(roi),
            net_annual_savings: format_currency(gain),
            platform_investment: format_currency(total_for_period),
            return_multiplier: format_multiplier(roi),
            is_positive_roi,
            value_propositions,
        })
    }
}

/// The four headline impact figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactStatsView {
    /// Efficiency gain per flow.
    pub savings_percentage: String,
    /// Estimated time reduction.
    pub time_reduction_percentage: String,
    /// Platform error reduction.
    pub error_reduction_percentage: String,
    /// Digital cost per interaction.
    pub cost_per_interaction: String,
    /// Whether the figures are placeholders rather than computed.
    pub is_placeholder: bool,
}

impl ImpactStatsView {
    /// Renders the impact figures, falling back to placeholders when absent.
    #[must_use]
    pub fn build(stats: Option<&ImpactStats>) -> Self {
        let (savings, time, error, cost, is_placeholder) = stats.map_or(
            (
                PLACEHOLDER_SAVINGS_PERCENTAGE,
                PLACEHOLDER_TIME_REDUCTION_PERCENTAGE,
                PLACEHOLDER_ERROR_REDUCTION_PERCENTAGE,
                PLACEHOLDER_COST_PER_INTERACTION,
                true,
            ),
            |s| {
                (
                    s.savings_percentage,
                    s.time_reduction_percentage,
                    s.error_reduction_percentage,
                    s.cost_per_interaction,
                    false,
                )
            },
        );

        Self {
            savings_percentage: format!("{savings}%"),
            time_reduction_percentage: format!("{time}%"),
            error_reduction_percentage: format!("{error}%"),
            cost_per_interaction: format!("${}", to_fixed(cost, 2)),
            is_placeholder,
        }
    }
}

/// Every rendered section of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportViews {
    /// Combined unit rate of all channels.
    pub combined_unit_rate: String,
    /// Headline cards.
    pub summary: SummaryCards,
    /// Per-workflow breakdown.
    pub breakdown: BreakdownTable,
    /// ROI highlight, when an ROI is known.
    pub showcase: Option<RoiShowcase>,
    /// Impact figures.
    pub impact: ImpactStatsView,
}

impl ReportViews {
    /// Renders every section from a calculation.
    #[must_use]
    pub fn build(calculation: &RoiCalculation, rates: &InteractionCosts) -> Self {
        let total_for_period: f64 = calculation.platform.total_for_period;
        Self {
            combined_unit_rate: format_combined_unit_rate(rates.combined_unit_rate()),
            summary: SummaryCards::build(
                &calculation.combined,
                total_for_period,
                calculation.platform.period_months,
            ),
            breakdown: BreakdownTable::build(&calculation.workflow_results, &calculation.combined),
            showcase: RoiShowcase::build(
                &calculation.workflow_results,
                &calculation.combined,
                total_for_period,
            ),
            impact: ImpactStatsView::build(calculation.impact.as_ref()),
        }
    }

    /// Whether there is anything beyond the empty-state prompt to show.
    #[must_use]
    pub fn has_results(&self) -> bool {
        !self.breakdown.rows.is_empty()
    }
}
