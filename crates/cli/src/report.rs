// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering of an ROI report.

use std::fmt;

use dfd_roi_api::format::{format_currency, format_unit_cost};
use dfd_roi_api::{BreakdownRow, BreakdownTable, ImpactStatsView, RoiReportResponse, RoiShowcase};

/// A report rendered for a terminal.
pub struct TextReport<'a>(pub &'a RoiReportResponse);

const TABLE_HEADERS: [&str; 7] = [
    "Workflow",
    "Minutes Saved",
    "Manual Process Saving",
    "Digital Cost",
    "Net Value",
    "Break-Even",
    "Annual Benefit",
];

fn row_cells(row: &BreakdownRow) -> Vec<&str> {
    let mut cells: Vec<&str> = vec![
        row.name.as_str(),
        row.minutes_saved.as_str(),
        row.labour_saving.as_str(),
        row.digital_cost.as_str(),
        row.net_value.as_str(),
        row.break_even.as_str(),
    ];
    if let Some(benefit) = &row.annual_benefit {
        cells.push(benefit.as_str());
    }
    cells
}

fn write_table(f: &mut fmt::Formatter<'_>, table: &BreakdownTable) -> fmt::Result {
    let columns: usize = if table.show_annual_benefit { 7 } else { 6 };
    let header: Vec<&str> = TABLE_HEADERS[..columns].to_vec();

    let mut lines: Vec<Vec<&str>> = vec![header];
    lines.extend(table.rows.iter().map(row_cells));
    let totals: Vec<&str> = row_cells(&table.totals);

    let mut widths: Vec<usize> = vec![0; columns];
    for cells in lines.iter().chain(std::iter::once(&totals)) {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let write_line = |f: &mut fmt::Formatter<'_>, cells: &[&str]| -> fmt::Result {
        write!(f, " ")?;
        for (i, (cell, width)) in cells.iter().zip(&widths).enumerate() {
            if i == 0 {
                write!(f, " {cell:<width$}")?;
            } else {
                write!(f, "  {cell:>width$}")?;
            }
        }
        writeln!(f)
    };

    for cells in &lines {
        write_line(f, cells)?;
    }
    let rule_width: usize = widths.iter().sum::<usize>() + 2 * columns;
    writeln!(f, "  {}", "-".repeat(rule_width.saturating_sub(1)))?;
    write_line(f, &totals)
}

fn write_showcase(f: &mut fmt::Formatter<'_>, showcase: &RoiShowcase) -> fmt::Result {
    writeln!(f, "Your ROI at a Glance")?;
    writeln!(f, "  {} return on investment", showcase.roi_percent)?;
    writeln!(f, "  Net annual savings:   {}", showcase.net_annual_savings)?;
    writeln!(f, "  Platform investment:  {}", showcase.platform_investment)?;
    writeln!(f, "  Return multiplier:    {}", showcase.return_multiplier)?;
    for proposition in &showcase.value_propositions {
        writeln!(f, "  * {proposition}")?;
    }
    Ok(())
}

fn write_impact(f: &mut fmt::Formatter<'_>, impact: &ImpactStatsView) -> fmt::Result {
    writeln!(f, "Impact")?;
    writeln!(f, "  Efficiency gain per flow:    {}", impact.savings_percentage)?;
    writeln!(f, "  Est. time reduction:         {}", impact.time_reduction_percentage)?;
    writeln!(f, "  Platform error reduction:    {}", impact.error_reduction_percentage)?;
    writeln!(f, "  Digital cost / interaction:  {}", impact.cost_per_interaction)?;
    if impact.is_placeholder {
        writeln!(f, "  (typical figures; add workflows to compute your own)")?;
    }
    Ok(())
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report: &RoiReportResponse = self.0;
        let views = &report.views;

        writeln!(f, "Digital Front Door ROI")?;
        writeln!(f, "======================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Platform cost:       {} per month, {} over {} months",
            format_currency(report.platform.total_monthly),
            format_currency(report.platform.total_for_period),
            report.platform.period_months
        )?;
        writeln!(f, "Combined unit rate:  {} (all channels)", views.combined_unit_rate)?;
        writeln!(f)?;

        if !views.has_results() {
            writeln!(f, "Add workflows to see your ROI analysis.")?;
            writeln!(f)?;
            return write_impact(f, &views.impact);
        }

        let summary = &views.summary;
        writeln!(f, "Summary")?;
        writeln!(f, "  Annual break-even:        {}", summary.annual_break_even)?;
        writeln!(f, "  Monthly break-even:       {}", summary.monthly_break_even)?;
        writeln!(f, "  Net value / interaction:  {}", summary.net_value_per_interaction)?;
        if let Some(gain) = &summary.net_annual_gain {
            writeln!(f, "  Net annual gain:          {} ({})", gain.value, gain.caption)?;
        }
        if let Some(roi) = &summary.roi_percent {
            writeln!(f, "  ROI:                      {roi}")?;
        }
        writeln!(f)?;

        writeln!(f, "Workflow Breakdown")?;
        write_table(f, &views.breakdown)?;
        writeln!(f)?;

        if let Some(showcase) = &views.showcase {
            write_showcase(f, showcase)?;
            writeln!(f)?;
        }

        write_impact(f, &views.impact)?;

        if !report.excluded_workflows.is_empty() {
            writeln!(f)?;
            writeln!(
                f,
                "{} workflow(s) skipped: each needs a name and minutes removed.",
                report.excluded_workflows.len()
            )?;
        }

        let per_flow: Vec<String> = report
            .workflow_results
            .iter()
            .map(|r| format!("{} {}", r.name, format_unit_cost(r.digital_cost_per_flow)))
            .collect();
        if !per_flow.is_empty() {
            writeln!(f)?;
            writeln!(f, "Digital cost per flow: {}", per_flow.join(", "))?;
        }
        Ok(())
    }
}
