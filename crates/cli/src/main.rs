// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command-line front end for the ROI calculator.
//!
//! Reads a JSON scenario (or starts from defaults), applies any overrides
//! given on the command line and prints the report as text or JSON.

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

mod report;

use std::convert::Infallible;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use color_eyre::{Result, eyre::Context};
use dfd_roi::{Command, Scenario};
use dfd_roi_api::{
    RoiReportResponse, ScenarioRequest, apply_commands, build_scenario, parse_scenario_request,
    render_report_json, report_for_scenario,
};
use dfd_roi_domain::input::{coerce_amount, coerce_period_months, coerce_volume};
use dfd_roi_domain::{WorkflowEdit, WorkflowId};
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

use crate::report::TextReport;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::default().add_directive(args.log_level().into())),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err:#}");
            std::process::exit(1);
        }
    }
    Ok(())
}

/// Reads a period length the way the form field does: unusable input and
/// zero become one month.
#[allow(clippy::unnecessary_wraps)]
fn parse_period_months(text: &str) -> Result<u32, Infallible> {
    Ok(coerce_period_months(text))
}

/// Reads a currency amount the way the form field does: unusable or
/// negative input becomes zero.
#[allow(clippy::unnecessary_wraps)]
fn parse_amount(text: &str) -> Result<f64, Infallible> {
    Ok(coerce_amount(text))
}

/// An annual volume assigned to one workflow from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct VolumeOverride {
    workflow: WorkflowId,
    annual_volume: Option<u64>,
}

/// Parses `wf-N=VOLUME` (or `N=VOLUME`). A blank volume clears it.
fn parse_volume_override(text: &str) -> Result<VolumeOverride, String> {
    let (id, volume) = text
        .split_once('=')
        .ok_or_else(|| format!("expected WORKFLOW=VOLUME, got '{text}'"))?;
    let id: &str = id.trim();
    let sequence: u64 = id
        .strip_prefix("wf-")
        .unwrap_or(id)
        .parse()
        .map_err(|_| format!("'{id}' is not a workflow id (expected wf-N)"))?;

    Ok(VolumeOverride {
        workflow: WorkflowId::new(sequence),
        annual_volume: coerce_volume(volume),
    })
}

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable report.
    Text,
    /// The full report as pretty-printed JSON.
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "dfd-roi", author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON scenario file. Defaults are used when omitted.
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Load the example workflow set ahead of any workflows in the scenario.
    #[arg(long)]
    examples: bool,

    /// Override the projection period, in months.
    #[arg(long, value_parser = parse_period_months)]
    period_months: Option<u32>,

    /// Override the staff cost per hour.
    #[arg(long, value_parser = parse_amount)]
    staff_hourly_cost: Option<f64>,

    /// Set a workflow's annual volume, e.g. `--volume wf-1=1200`. Repeatable.
    #[arg(long = "volume", value_name = "WORKFLOW=VOLUME", value_parser = parse_volume_override)]
    volumes: Vec<VolumeOverride>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    /// Reads the scenario request, or the default request without a file.
    fn load_request(&self) -> Result<ScenarioRequest> {
        let mut request: ScenarioRequest = match &self.scenario {
            Some(path) => {
                let text: String = std::fs::read_to_string(path)
                    .wrap_err_with(|| format!("failed to read scenario {}", path.display()))?;
                info!(path = %path.display(), "Loaded scenario file");
                parse_scenario_request(&text)
                    .wrap_err_with(|| format!("failed to parse scenario {}", path.display()))?
            }
            None => ScenarioRequest::default(),
        };

        if self.examples {
            request.load_examples = true;
        }
        Ok(request)
    }

    /// Edits requested through flags, applied after the scenario file.
    fn overrides(&self) -> Vec<Command> {
        let mut commands: Vec<Command> = Vec::new();
        if let Some(months) = self.period_months {
            commands.push(Command::SetPeriodMonths { months });
        }
        if let Some(value) = self.staff_hourly_cost {
            commands.push(Command::SetStaffHourlyCost { value });
        }
        for volume in &self.volumes {
            commands.push(Command::UpdateWorkflow {
                id: volume.workflow,
                edit: WorkflowEdit::AnnualVolume(volume.annual_volume),
            });
        }
        commands
    }

    fn run(self) -> Result<()> {
        let request: ScenarioRequest = self.load_request()?;
        let scenario: Scenario = build_scenario(request).wrap_err("invalid scenario")?;

        let overrides: Vec<Command> = self.overrides();
        debug!(count = overrides.len(), "Applying command-line overrides");
        let scenario: Scenario =
            apply_commands(&scenario, overrides).wrap_err("invalid command-line override")?;

        let report: RoiReportResponse = report_for_scenario(&scenario);
        match self.format {
            OutputFormat::Text => print!("{}", TextReport(&report)),
            OutputFormat::Json => {
                println!(
                    "{}",
                    render_report_json(&report).wrap_err("failed to render report")?
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_defaults() {
        let args: Args = Args::try_parse_from(["dfd-roi"]).unwrap();

        assert!(args.scenario.is_none());
        assert!(!args.examples);
        assert_eq!(args.format, OutputFormat::Text);
        assert!(args.overrides().is_empty());
        assert_eq!(args.log_level(), LevelFilter::WARN);
    }

    #[test]
    fn test_verbosity_flags() {
        let verbose: Args = Args::try_parse_from(["dfd-roi", "-v"]).unwrap();
        let quiet: Args = Args::try_parse_from(["dfd-roi", "-q"]).unwrap();

        assert_eq!(verbose.log_level(), LevelFilter::INFO);
        assert_eq!(quiet.log_level(), LevelFilter::ERROR);
    }

    #[test]
    fn test_overrides_follow_flags() {
        let args: Args = Args::try_parse_from([
            "dfd-roi",
            "--period-months",
            "24",
            "--staff-hourly-cost",
            "45",
        ])
        .unwrap();

        assert_eq!(
            args.overrides(),
            vec![
                Command::SetPeriodMonths { months: 24 },
                Command::SetStaffHourlyCost { value: 45.0 },
            ]
        );
    }

    #[test]
    fn test_examples_flag_sets_load_examples() {
        let args: Args = Args::try_parse_from(["dfd-roi", "--examples", "--format", "json"]).unwrap();

        let request: ScenarioRequest = args.load_request().unwrap();

        assert!(request.load_examples);
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_missing_scenario_file_is_an_error() {
        let args: Args =
            Args::try_parse_from(["dfd-roi", "--scenario", "/nonexistent/scenario.json"]).unwrap();

        let err = args.load_request().unwrap_err();

        assert!(err.to_string().contains("failed to read scenario"));
    }

    #[test]
    fn test_period_months_flag_floors_at_one() {
        let zero: Args = Args::try_parse_from(["dfd-roi", "--period-months", "0"]).unwrap();
        let junk: Args = Args::try_parse_from(["dfd-roi", "--period-months", "soon"]).unwrap();

        assert_eq!(zero.period_months, Some(1));
        assert_eq!(junk.period_months, Some(1));
        assert!(zero.run().is_ok());
    }

    #[test]
    fn test_staff_hourly_cost_flag_coerces_like_form_input() {
        let negative: Args =
            Args::try_parse_from(["dfd-roi", "--staff-hourly-cost=-20"]).unwrap();
        let suffixed: Args =
            Args::try_parse_from(["dfd-roi", "--staff-hourly-cost", "42.5/hr"]).unwrap();

        assert_eq!(negative.staff_hourly_cost, Some(0.0));
        assert_eq!(suffixed.staff_hourly_cost, Some(42.5));
    }

    #[test]
    fn test_volume_flags_become_workflow_edits() {
        let args: Args = Args::try_parse_from([
            "dfd-roi",
            "--examples",
            "--volume",
            "wf-1=1200",
            "--volume",
            "3=",
        ])
        .unwrap();

        assert_eq!(
            args.overrides(),
            vec![
                Command::UpdateWorkflow {
                    id: WorkflowId::new(1),
                    edit: WorkflowEdit::AnnualVolume(Some(1200)),
                },
                Command::UpdateWorkflow {
                    id: WorkflowId::new(3),
                    edit: WorkflowEdit::AnnualVolume(None),
                },
            ]
        );
        assert!(args.run().is_ok());
    }

    #[test]
    fn test_malformed_volume_flag_is_rejected() {
        assert!(Args::try_parse_from(["dfd-roi", "--volume", "1200"]).is_err());
        assert!(Args::try_parse_from(["dfd-roi", "--volume", "first=1200"]).is_err());
    }

    #[test]
    fn test_volume_for_unknown_workflow_fails() {
        let args: Args = Args::try_parse_from(["dfd-roi", "--volume", "wf-9=100"]).unwrap();

        let err = args.run().unwrap_err();

        assert!(err.to_string().contains("invalid command-line override"));
    }
}
