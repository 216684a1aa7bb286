//! Rental status values and the lifecycle state machine.
//!
//! A rental moves `pending -> active -> completed`, with `cancelled` as an
//! alternate exit from both `pending` (owner rejection) and `active`.
//! `completed` and `cancelled` are terminal. Completing an already-completed
//! rental is treated as an idempotent no-op by the service layer, not a
//! transition.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lifecycle status of a rental, stored as a snake_case string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentalStatus {
    Pending,
    Active,
    Completed,
    Cancelled,
}

impl RentalStatus {
    /// The database/string representation of this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parse a stored status string.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "pending" => Ok(Self::Pending),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(CoreError::Internal(format!(
                "Unknown rental status '{other}'"
            ))),
        }
    }

    /// Whether this status admits no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl std::fmt::Display for RentalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the set of statuses reachable from `from`.
///
/// Terminal statuses return an empty slice.
pub fn valid_transitions(from: RentalStatus) -> &'static [RentalStatus] {
    use RentalStatus::*;
    match from {
        Pending => &[Active, Cancelled],
        Active => &[Completed, Cancelled],
        Completed | Cancelled => &[],
    }
}

/// Check whether a transition from `from` to `to` is allowed.
pub fn can_transition(from: RentalStatus, to: RentalStatus) -> bool {
    valid_transitions(from).contains(&to)
}

/// Validate a transition, producing an [`CoreError::InvalidState`] for
/// illegal ones.
pub fn validate_transition(from: RentalStatus, to: RentalStatus) -> Result<(), CoreError> {
    if can_transition(from, to) {
        Ok(())
    } else {
        Err(CoreError::InvalidState(format!(
            "Cannot transition rental from {from} to {to}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use RentalStatus::*;

    // -----------------------------------------------------------------------
    // Valid transitions
    // -----------------------------------------------------------------------

    #[test]
    fn pending_to_active() {
        assert!(can_transition(Pending, Active));
    }

    #[test]
    fn pending_to_cancelled() {
        assert!(can_transition(Pending, Cancelled));
    }

    #[test]
    fn active_to_completed() {
        assert!(can_transition(Active, Completed));
    }

    #[test]
    fn active_to_cancelled() {
        assert!(can_transition(Active, Cancelled));
    }

    // -----------------------------------------------------------------------
    // Terminal states have no outgoing transitions
    // -----------------------------------------------------------------------

    #[test]
    fn completed_has_no_transitions() {
        assert!(valid_transitions(Completed).is_empty());
        assert!(Completed.is_terminal());
    }

    #[test]
    fn cancelled_has_no_transitions() {
        assert!(valid_transitions(Cancelled).is_empty());
        assert!(Cancelled.is_terminal());
    }

    // -----------------------------------------------------------------------
    // Invalid transitions
    // -----------------------------------------------------------------------

    #[test]
    fn pending_to_completed_invalid() {
        assert!(!can_transition(Pending, Completed));
    }

    #[test]
    fn cancelled_to_active_invalid() {
        assert!(!can_transition(Cancelled, Active));
    }

    #[test]
    fn completed_to_active_invalid() {
        assert!(!can_transition(Completed, Active));
    }

    #[test]
    fn active_to_pending_invalid() {
        assert!(!can_transition(Active, Pending));
    }

    // -----------------------------------------------------------------------
    // validate_transition returns a descriptive error
    // -----------------------------------------------------------------------

    #[test]
    fn validate_transition_ok() {
        assert!(validate_transition(Pending, Active).is_ok());
    }

    #[test]
    fn validate_transition_err() {
        let err = validate_transition(Completed, Active).unwrap_err();
        assert!(err.to_string().contains("completed"));
        assert!(err.to_string().contains("active"));
    }

    // -----------------------------------------------------------------------
    // String round-trips
    // -----------------------------------------------------------------------

    #[test]
    fn parse_known_statuses() {
        for status in [Pending, Active, Completed, Cancelled] {
            assert_eq!(RentalStatus::parse(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn parse_unknown_status_fails() {
        assert!(RentalStatus::parse("archived").is_err());
    }
}
