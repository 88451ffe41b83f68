// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, Scenario, WorkflowResult, apply};
use dfd_roi_domain::{PlatformCostField, Workflow, WorkflowDraft, WorkflowId};

pub const TOLERANCE: f64 = 1e-9;

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

pub fn create_test_workflow(
    id: u64,
    name: &str,
    minutes_removed: f64,
    channels: (u32, u32, u32),
) -> Workflow {
    let (sms_per_flow, emails_per_flow, wx_connect_runs_per_flow) = channels;
    Workflow {
        id: WorkflowId::new(id),
        name: String::from(name),
        minutes_removed,
        sms_per_flow,
        emails_per_flow,
        wx_connect_runs_per_flow,
        letters_per_flow: 0,
        annual_volume: None,
    }
}

pub fn create_test_draft(name: &str, minutes_removed: f64) -> WorkflowDraft {
    WorkflowDraft {
        name: String::from(name),
        minutes_removed,
        ..WorkflowDraft::default()
    }
}

pub fn create_test_result(net_value_per_interaction: f64, annual_benefit: Option<f64>) -> WorkflowResult {
    WorkflowResult {
        name: String::from("Test Workflow"),
        minutes_removed: 10.0,
        labour_saving: net_value_per_interaction,
        material_saving: 0.0,
        digital_cost_per_flow: 0.0,
        net_value_per_interaction,
        break_even_interactions: 0,
        annual_benefit,
    }
}

/// A default scenario with the example workflows and a flat platform subscription.
pub fn create_test_scenario(platform_cost_per_month: f64) -> Scenario {
    let scenario: Scenario = apply(&Scenario::new(), Command::LoadExampleWorkflows)
        .unwrap()
        .new_scenario;
    apply(
        &scenario,
        Command::SetPlatformCost {
            field: PlatformCostField::PlatformCostPerMonth,
            value: platform_cost_per_month,
        },
    )
    .unwrap()
    .new_scenario
}
