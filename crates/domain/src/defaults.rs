// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Default rates and the example workflow set.

/// Default projection period in months.
pub const PERIOD_MONTHS: u32 = 12;

/// Default price of one AI agent unit.
pub const AI_AGENT_UNIT_PRICE: f64 = 109.77;

/// Default price of one AI assistant unit.
pub const AI_ASSISTANT_UNIT_PRICE: f64 = 32.93;

/// Default cost per SMS segment.
pub const SMS_PER_SEGMENT_COST: f64 = 0.04;

/// Default cost per WX Connect remote run.
pub const WX_CONNECT_REMOTE_RUN_COST: f64 = 0.01;

/// Default cost per outbound email.
pub const EMAIL_SEND_COST: f64 = 0.0;

/// Default fully-loaded staff cost per hour.
pub const STAFF_HOURLY_COST: f64 = 60.0;

/// Default postage and paper cost per letter.
pub const POSTAGE_PAPER_COST: f64 = 0.0;

/// Industry baseline of manual coordination minutes per workflow.
pub const BASELINE_MINUTES_PER_WORKFLOW: f64 = 45.0;

/// Typical human-error reduction from structured digital automation, in percent.
pub const ERROR_REDUCTION_PERCENT: u8 = 85;

/// Channel-usage profile of one example workflow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExampleWorkflow {
    /// Workflow name.
    pub name: &'static str,
    /// Staff minutes removed per execution.
    pub minutes_removed: f64,
    /// SMS segments per execution.
    pub sms_per_flow: u32,
    /// Emails per execution.
    pub emails_per_flow: u32,
    /// WX Connect runs per execution.
    pub wx_connect_runs_per_flow: u32,
}

/// The example set offered by "load examples".
pub const EXAMPLE_WORKFLOWS: [ExampleWorkflow; 5] = [
    ExampleWorkflow {
        name: "Pre-Admission",
        minutes_removed: 30.0,
        sms_per_flow: 2,
        emails_per_flow: 1,
        wx_connect_runs_per_flow: 1,
    },
    ExampleWorkflow {
        name: "Appointment Confirmation",
        minutes_removed: 20.0,
        sms_per_flow: 1,
        emails_per_flow: 1,
        wx_connect_runs_per_flow: 1,
    },
    ExampleWorkflow {
        name: "Appointment Reschedule",
        minutes_removed: 15.0,
        sms_per_flow: 2,
        emails_per_flow: 1,
        wx_connect_runs_per_flow: 1,
    },
    ExampleWorkflow {
        name: "Appointment Cancellation",
        minutes_removed: 10.0,
        sms_per_flow: 1,
        emails_per_flow: 1,
        wx_connect_runs_per_flow: 1,
    },
    ExampleWorkflow {
        name: "Post-Operative Notification",
        minutes_removed: 10.0,
        sms_per_flow: 1,
        emails_per_flow: 2,
        wx_connect_runs_per_flow: 1,
    },
];

impl ExampleWorkflow {
    /// Materializes the example as a workflow with the given id and no volume.
    #[must_use]
    pub fn to_workflow(&self, id: crate::WorkflowId) -> crate::Workflow {
        crate::Workflow {
            id,
            name: String::from(self.name),
            minutes_removed: self.minutes_removed,
            sms_per_flow: self.sms_per_flow,
            emails_per_flow: self.emails_per_flow,
            wx_connect_runs_per_flow: self.wx_connect_runs_per_flow,
            letters_per_flow: 0,
            annual_volume: None,
        }
    }
}
