// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use dfd_roi_domain::EXAMPLE_WORKFLOWS;

use crate::{PlatformCostsRequest, ScenarioRequest, WorkflowRequest};

pub fn create_workflow_request(name: &str, minutes_removed: f64) -> WorkflowRequest {
    WorkflowRequest {
        name: String::from(name),
        minutes_removed,
        ..WorkflowRequest::default()
    }
}

/// The example set spelled out as request rows, so volumes can be attached.
pub fn create_example_workflow_requests() -> Vec<WorkflowRequest> {
    EXAMPLE_WORKFLOWS
        .iter()
        .map(|example| WorkflowRequest {
            name: String::from(example.name),
            minutes_removed: example.minutes_removed,
            sms_per_flow: example.sms_per_flow,
            emails_per_flow: example.emails_per_flow,
            wx_connect_runs_per_flow: example.wx_connect_runs_per_flow,
            letters_per_flow: 0,
            annual_volume: None,
        })
        .collect()
}

/// The example set with a flat platform subscription and, optionally, an
/// annual volume on the first workflow.
pub fn create_example_request(
    platform_cost_per_month: f64,
    first_volume: Option<u64>,
) -> ScenarioRequest {
    let mut workflows: Vec<WorkflowRequest> = create_example_workflow_requests();
    workflows[0].annual_volume = first_volume;

    ScenarioRequest {
        platform_costs: PlatformCostsRequest {
            platform_cost_per_month: Some(platform_cost_per_month),
            ..PlatformCostsRequest::default()
        },
        workflows,
        ..ScenarioRequest::default()
    }
}
