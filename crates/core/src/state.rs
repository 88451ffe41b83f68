// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use dfd_roi_domain::{
    HumanCosts, InteractionCosts, PlatformCosts, ServiceId, Workflow, WorkflowId,
};

/// The complete calculator configuration for one session.
///
/// A scenario is never mutated in place by the calculator. Edits go through
/// [`crate::apply`], which returns a new scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    /// Recurring platform costs.
    pub platform_costs: PlatformCosts,
    /// Digital channel unit rates.
    pub interaction_costs: InteractionCosts,
    /// Staff and material rates.
    pub human_costs: HumanCosts,
    /// Workflows under evaluation, in entry order.
    pub workflows: Vec<Workflow>,
    /// Sequence number for the next workflow id.
    next_workflow_id: u64,
    /// Sequence number for the next third-party service id.
    next_service_id: u64,
}

impl Scenario {
    /// Creates a scenario with default rates and no workflows.
    #[must_use]
    pub fn new() -> Self {
        Self {
            platform_costs: PlatformCosts::default(),
            interaction_costs: InteractionCosts::default(),
            human_costs: HumanCosts::default(),
            workflows: Vec::new(),
            next_workflow_id: 1,
            next_service_id: 1,
        }
    }

    /// Looks up a workflow by id.
    #[must_use]
    pub fn workflow(&self, id: WorkflowId) -> Option<&Workflow> {
        self.workflows.iter().find(|w| w.id == id)
    }

    pub(crate) fn workflow_mut(&mut self, id: WorkflowId) -> Option<&mut Workflow> {
        self.workflows.iter_mut().find(|w| w.id == id)
    }

    /// Reserves the next workflow id.
    pub(crate) const fn allocate_workflow_id(&mut self) -> WorkflowId {
        let id: WorkflowId = WorkflowId::new(self.next_workflow_id);
        self.next_workflow_id += 1;
        id
    }

    /// Reserves the next third-party service id.
    pub(crate) const fn allocate_service_id(&mut self) -> ServiceId {
        let id: ServiceId = ServiceId::new(self.next_service_id);
        self.next_service_id += 1;
        id
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new()
    }
}

/// An entity created by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Created {
    /// A workflow was added.
    Workflow(WorkflowId),
    /// A third-party service was added.
    Service(ServiceId),
}

/// The result of a successful edit.
///
/// Transitions are atomic: they either succeed completely or leave the
/// original scenario untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult {
    /// The scenario after the edit.
    pub new_scenario: Scenario,
    /// Entities created by the edit, in creation order.
    pub created: Vec<Created>,
}
