// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::format::MISSING_VALUE;
use crate::{
    BreakdownRow, ImpactStatsView, ReportViews, RoiReportResponse, RoiShowcase, SummaryCards,
    calculate_report, monthly_break_even,
};

use super::helpers::create_example_request;

fn render_views(platform_cost_per_month: f64, first_volume: Option<u64>) -> ReportViews {
    let report: RoiReportResponse =
        calculate_report(create_example_request(platform_cost_per_month, first_volume)).unwrap();
    report.views
}

#[test]
fn test_monthly_break_even_rounds_up() {
    assert_eq!(monthly_break_even(142, 12), 12);
    assert_eq!(monthly_break_even(120, 12), 10);
    assert_eq!(monthly_break_even(25, 24), 2);
    assert_eq!(monthly_break_even(0, 12), 0);
}

#[test]
fn test_monthly_break_even_zero_period_is_one_month() {
    assert_eq!(monthly_break_even(5, 0), 5);
}

#[test]
fn test_summary_cards_without_volumes() {
    let summary: SummaryCards = render_views(1000.0, None).summary;

    assert_eq!(summary.annual_break_even, "142");
    assert_eq!(summary.monthly_break_even, "12");
    assert_eq!(summary.net_value_per_interaction, "$84.67");
    assert!(summary.net_annual_gain.is_none());
    assert!(summary.roi_percent.is_none());
}

#[test]
fn test_summary_cards_with_volume() {
    let summary: SummaryCards = render_views(1000.0, Some(1000)).summary;

    let gain = summary.net_annual_gain.unwrap();
    assert_eq!(gain.value, "$17,910.00");
    assert_eq!(gain.caption, "after $12,000.00 platform cost");
    assert_eq!(summary.roi_percent.as_deref(), Some("149.3%"));
}

#[test]
fn test_breakdown_hides_benefit_column_without_volumes() {
    let views: ReportViews = render_views(1000.0, None);

    assert!(!views.breakdown.show_annual_benefit);
    assert!(views.breakdown.rows.iter().all(|r| r.annual_benefit.is_none()));
    assert!(views.breakdown.totals.annual_benefit.is_none());
}

#[test]
fn test_breakdown_rows_and_totals() {
    let views: ReportViews = render_views(1000.0, Some(1000));

    assert_eq!(
        views.breakdown.rows[0],
        BreakdownRow {
            name: String::from("Pre-Admission"),
            minutes_saved: String::from("30 min"),
            labour_saving: String::from("$30.00"),
            digital_cost: String::from("$0.09"),
            net_value: String::from("$29.91"),
            break_even: String::from("402"),
            annual_benefit: Some(String::from("$29,910.00")),
        }
    );
    assert_eq!(
        views.breakdown.rows[1].annual_benefit.as_deref(),
        Some(MISSING_VALUE)
    );

    let totals: &BreakdownRow = &views.breakdown.totals;
    assert_eq!(totals.minutes_saved, "85 min");
    assert_eq!(totals.labour_saving, "$85.00");
    assert_eq!(totals.digital_cost, "$0.33");
    assert_eq!(totals.net_value, "$84.67");
    assert_eq!(totals.break_even, "142");
    assert_eq!(totals.annual_benefit.as_deref(), Some("$29,910.00"));
}

#[test]
fn test_showcase_absent_without_volumes() {
    assert!(render_views(1000.0, None).showcase.is_none());
}

#[test]
fn test_showcase_absent_without_platform_cost() {
    assert!(render_views(0.0, Some(1000)).showcase.is_none());
}

#[test]
fn test_showcase_positive_roi() {
    let showcase: RoiShowcase = render_views(1000.0, Some(1000)).showcase.unwrap();

    assert_eq!(showcase.roi_percent, "+149%");
    assert_eq!(showcase.net_annual_savings, "$17,910.00");
    assert_eq!(showcase.platform_investment, "$12,000.00");
    assert_eq!(showcase.return_multiplier, "2.5x");
    assert!(showcase.is_positive_roi);
    assert_eq!(
        showcase.value_propositions,
        vec![
            String::from("Break-even in just 142 interactions"),
            String::from("$84.67 saved per interaction set"),
            String::from("85 minutes saved per patient journey"),
            String::from("$17,910.00 net gain in year 1"),
        ]
    );
}

#[test]
fn test_showcase_negative_roi_has_no_value_propositions() {
    let showcase: RoiShowcase = render_views(10_000.0, Some(1000)).showcase.unwrap();

    assert_eq!(showcase.net_annual_savings, "-$90,090.00");
    assert!(showcase.roi_percent.starts_with('-'));
    assert!(!showcase.is_positive_roi);
    assert!(showcase.value_propositions.is_empty());
}

#[test]
fn test_impact_view_from_results() {
    let impact: ImpactStatsView = render_views(0.0, None).impact;

    assert_eq!(impact.savings_percentage, "100%");
    assert_eq!(impact.time_reduction_percentage, "38%");
    assert_eq!(impact.error_reduction_percentage, "85%");
    assert_eq!(impact.cost_per_interaction, "$0.07");
    assert!(!impact.is_placeholder);
}

#[test]
fn test_impact_view_placeholders() {
    let impact: ImpactStatsView = ImpactStatsView::build(None);

    assert_eq!(impact.savings_percentage, "42%");
    assert_eq!(impact.time_reduction_percentage, "68%");
    assert_eq!(impact.error_reduction_percentage, "85%");
    assert_eq!(impact.cost_per_interaction, "$12.50");
    assert!(impact.is_placeholder);
}

#[test]
fn test_combined_unit_rate_view() {
    assert_eq!(render_views(0.0, None).combined_unit_rate, "$0.050");
}

#[test]
fn test_empty_scenario_has_no_results() {
    let report: RoiReportResponse = calculate_report(crate::ScenarioRequest::default()).unwrap();

    assert!(!report.views.has_results());
    assert_eq!(report.views.breakdown.totals.minutes_saved, "0 min");
    assert!(report.views.impact.is_placeholder);
}
