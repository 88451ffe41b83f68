// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, ServiceId, WorkflowId};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidPeriodMonths { months: 0 };
    assert_eq!(
        format!("{err}"),
        "Invalid period length: 0 months. Must be at least 1"
    );

    let err: DomainError = DomainError::NonFiniteAmount {
        field: String::from("staffHourlyCost"),
    };
    assert_eq!(
        format!("{err}"),
        "Amount for 'staffHourlyCost' must be a finite number"
    );

    let err: DomainError = DomainError::WorkflowNotFound(WorkflowId::new(7));
    assert_eq!(format!("{err}"), "Workflow wf-7 not found");

    let err: DomainError = DomainError::ServiceNotFound(ServiceId::new(3));
    assert_eq!(format!("{err}"), "Third-party service svc-3 not found");
}

#[test]
fn test_domain_error_is_std_error() {
    let err: Box<dyn std::error::Error> =
        Box::new(DomainError::WorkflowNotFound(WorkflowId::new(1)));
    assert_eq!(err.to_string(), "Workflow wf-1 not found");
}
