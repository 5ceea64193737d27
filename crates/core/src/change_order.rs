//! Change-order lifecycle (pending -> approved | rejected).
//!
//! Status IDs match the `change_order_statuses` seed data. Both resolved
//! states are terminal; resolution and its effect on the project value are
//! applied together by the repository layer in one transaction.

use crate::error::CoreError;
use crate::fields::{require_amount, require_text, MAX_LONG_TEXT_LEN};
use crate::types::DbId;

pub const STATUS_PENDING: i16 = 1;
pub const STATUS_APPROVED: i16 = 2;
pub const STATUS_REJECTED: i16 = 3;

pub fn status_name(id: i16) -> &'static str {
    match id {
        STATUS_PENDING => "pending",
        STATUS_APPROVED => "approved",
        STATUS_REJECTED => "rejected",
        _ => "unknown",
    }
}

/// Validate a new change order before it is recorded as pending.
pub fn validate_new(description: &str, additional_cost: f64) -> Result<(), CoreError> {
    require_text("description", description, MAX_LONG_TEXT_LEN)?;
    require_amount("additional_cost", additional_cost)?;
    Ok(())
}

/// A decision on a pending change order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Approve,
    Reject,
}

impl Resolution {
    /// Status the order moves to.
    pub fn target_status(self) -> i16 {
        match self {
            Resolution::Approve => STATUS_APPROVED,
            Resolution::Reject => STATUS_REJECTED,
        }
    }

    /// Amount added to the owning project's value when this resolution lands.
    pub fn value_delta(self, additional_cost: f64) -> f64 {
        match self {
            Resolution::Approve => additional_cost,
            Resolution::Reject => 0.0,
        }
    }

    /// Event type published once the resolution is committed.
    pub fn event_type(self) -> &'static str {
        match self {
            Resolution::Approve => "change_order.approved",
            Resolution::Reject => "change_order.rejected",
        }
    }
}

/// Error for a resolution attempt on an order that is no longer pending.
pub fn already_resolved(id: DbId) -> CoreError {
    CoreError::AlreadyResolved {
        entity: "ChangeOrder",
        id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_change_order_passes() {
        assert!(validate_new("Add two 20A circuits in garage", 500.0).is_ok());
        assert!(validate_new("No-cost scope clarification", 0.0).is_ok());
    }

    #[test]
    fn empty_description_rejected() {
        assert!(matches!(
            validate_new("  ", 100.0),
            Err(CoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn negative_cost_rejected() {
        assert!(matches!(
            validate_new("Extra run", -5.0),
            Err(CoreError::InvalidAmount(_))
        ));
    }

    #[test]
    fn approve_adds_cost_reject_adds_nothing() {
        assert_eq!(Resolution::Approve.value_delta(500.0), 500.0);
        assert_eq!(Resolution::Reject.value_delta(500.0), 0.0);
    }

    #[test]
    fn resolution_targets() {
        assert_eq!(Resolution::Approve.target_status(), STATUS_APPROVED);
        assert_eq!(Resolution::Reject.target_status(), STATUS_REJECTED);
    }

    #[test]
    fn already_resolved_names_the_order() {
        let err = already_resolved(7);
        assert_eq!(
            err,
            CoreError::AlreadyResolved {
                entity: "ChangeOrder",
                id: 7
            }
        );
        assert_eq!(err.to_string(), "ChangeOrder 7 has already been resolved");
    }

    #[test]
    fn status_names() {
        assert_eq!(status_name(STATUS_PENDING), "pending");
        assert_eq!(status_name(STATUS_APPROVED), "approved");
        assert_eq!(status_name(STATUS_REJECTED), "rejected");
    }
}
