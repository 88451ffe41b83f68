// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{assert_close, create_test_draft, create_test_scenario};
use crate::{Command, ImpactStats, RoiCalculation, Scenario, apply, calculate};
use dfd_roi_domain::{WorkflowDraft, WorkflowEdit, WorkflowId};

#[test]
fn test_empty_scenario_has_no_results() {
    let calculation: RoiCalculation = calculate(&Scenario::new());

    assert!(calculation.workflow_results.is_empty());
    assert!(calculation.impact.is_none());
    assert_eq!(calculation.combined.combined_break_even, 0);
    assert!(!calculation.combined.has_volumes);
    assert_close(calculation.platform.total_for_period, 0.0);
}

#[test]
fn test_example_set_figures() {
    let calculation: RoiCalculation = calculate(&create_test_scenario(1000.0));

    let nets: Vec<f64> = calculation
        .workflow_results
        .iter()
        .map(|r| r.net_value_per_interaction)
        .collect();
    assert_eq!(nets.len(), 5);
    for (actual, expected) in nets.iter().zip([29.91, 19.95, 14.91, 9.95, 9.95]) {
        assert_close(*actual, expected);
    }

    assert_close(calculation.platform.total_for_period, 12000.0);
    assert_close(calculation.combined.combined_net_value, 84.67);
    assert_eq!(calculation.combined.combined_break_even, 142);
    assert_eq!(calculation.workflow_results[0].break_even_interactions, 402);
}

#[test]
fn test_example_set_impact_stats() {
    let impact: ImpactStats = calculate(&create_test_scenario(0.0)).impact.unwrap();

    assert_eq!(impact.savings_percentage, 100);
    assert_eq!(impact.time_reduction_percentage, 38);
    assert_eq!(impact.error_reduction_percentage, 85);
    assert_close(impact.cost_per_interaction, 0.066);
}

#[test]
fn test_no_volumes_leaves_roi_unknown() {
    let calculation: RoiCalculation = calculate(&create_test_scenario(1000.0));

    assert!(!calculation.combined.has_volumes);
    assert!(calculation.combined.total_annual_benefit.is_none());
    assert!(calculation.combined.net_annual_gain.is_none());
    assert!(calculation.combined.roi_percent.is_none());
}

#[test]
fn test_single_volume_drives_roi() {
    let scenario: Scenario = apply(
        &create_test_scenario(1000.0),
        Command::UpdateWorkflow {
            id: WorkflowId::new(1),
            edit: WorkflowEdit::AnnualVolume(Some(1000)),
        },
    )
    .unwrap()
    .new_scenario;

    let calculation: RoiCalculation = calculate(&scenario);

    assert!(calculation.combined.has_volumes);
    assert_close(calculation.combined.total_annual_benefit.unwrap(), 29910.0);
    assert_close(calculation.combined.net_annual_gain.unwrap(), 17910.0);
    assert_close(calculation.combined.roi_percent.unwrap(), 149.25);
}

#[test]
fn test_uncountable_workflows_are_excluded() {
    let scenario: Scenario = create_test_scenario(0.0);
    let scenario: Scenario = apply(
        &scenario,
        Command::AddWorkflow {
            draft: create_test_draft("   ", 30.0),
        },
    )
    .unwrap()
    .new_scenario;
    let scenario: Scenario = apply(
        &scenario,
        Command::AddWorkflow {
            draft: create_test_draft("Referral", 0.0),
        },
    )
    .unwrap()
    .new_scenario;

    let calculation: RoiCalculation = calculate(&scenario);

    assert_eq!(calculation.workflow_results.len(), 5);
    assert_eq!(
        calculation.excluded_workflows,
        vec![WorkflowId::new(6), WorkflowId::new(7)]
    );
}

#[test]
fn test_results_preserve_input_order() {
    let calculation: RoiCalculation = calculate(&create_test_scenario(0.0));

    let names: Vec<&str> = calculation
        .workflow_results
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "Pre-Admission",
            "Appointment Confirmation",
            "Appointment Reschedule",
            "Appointment Cancellation",
            "Post-Operative Notification",
        ]
    );
}

#[test]
fn test_calculate_is_idempotent() {
    let scenario: Scenario = create_test_scenario(750.0);

    assert_eq!(calculate(&scenario), calculate(&scenario));
}

#[test]
fn test_zero_platform_cost_breaks_even_immediately() {
    let calculation: RoiCalculation = calculate(&create_test_scenario(0.0));

    assert_eq!(calculation.combined.combined_break_even, 0);
    assert!(
        calculation
            .workflow_results
            .iter()
            .all(|r| r.break_even_interactions == 0)
    );
}

#[test]
fn test_letters_are_valued_only_with_postage_cost() {
    let draft: WorkflowDraft = WorkflowDraft {
        letters_per_flow: 2,
        ..create_test_draft("Results Letter", 6.0)
    };
    let scenario: Scenario = apply(&Scenario::new(), Command::AddWorkflow { draft })
        .unwrap()
        .new_scenario;

    let unpriced: RoiCalculation = calculate(&scenario);
    assert_close(unpriced.workflow_results[0].material_saving, 0.0);

    let scenario: Scenario = apply(&scenario, Command::SetPostagePaperCost { value: 0.85 })
        .unwrap()
        .new_scenario;
    let priced: RoiCalculation = calculate(&scenario);
    assert_close(priced.workflow_results[0].material_saving, 1.7);
    assert_close(priced.workflow_results[0].net_value_per_interaction, 7.7);
}
