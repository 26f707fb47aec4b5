//! Application Status State Machine
//!
//! Validates status transitions for the order placement pipeline.

use crate::domain::order_processing::errors::ApplicationError;
use crate::domain::order_processing::value_objects::ApplicationStatus;

/// State machine for validating application status transitions.
///
/// The pipeline itself only performs the two transitions out of
/// `AwaitingOrder`; `Preliminary` to `AwaitingOrder` happens upstream and is
/// recognized here so reconstituted records can be reasoned about uniformly.
/// Terminal states have no outgoing transitions - re-queueing a failed
/// application is the job of an external recovery process.
pub struct ApplicationStateMachine;

impl ApplicationStateMachine {
    /// Check if a status transition is valid.
    #[must_use]
    pub fn is_valid_transition(from: ApplicationStatus, to: ApplicationStatus) -> bool {
        matches!(
            (from, to),
            (ApplicationStatus::Preliminary, ApplicationStatus::AwaitingOrder)
                | (ApplicationStatus::AwaitingOrder, ApplicationStatus::Complete)
                | (ApplicationStatus::AwaitingOrder, ApplicationStatus::OrderFailed)
        )
    }

    /// Validate a status transition.
    ///
    /// # Errors
    ///
    /// Returns error if the transition is invalid.
    pub fn validate_transition(
        from: ApplicationStatus,
        to: ApplicationStatus,
    ) -> Result<(), ApplicationError> {
        if Self::is_valid_transition(from, to) {
            Ok(())
        } else {
            Err(ApplicationError::InvalidStateTransition {
                from,
                to,
                reason: Self::transition_error_reason(from, to),
            })
        }
    }

    /// Get a human-readable reason for an invalid transition.
    #[must_use]
    pub fn transition_error_reason(from: ApplicationStatus, to: ApplicationStatus) -> String {
        match from {
            ApplicationStatus::Complete => {
                format!("Application is already complete, cannot transition to {to}")
            }
            ApplicationStatus::OrderFailed => {
                format!("Application order has failed, cannot transition to {to}")
            }
            _ => format!("Invalid transition from {from} to {to}"),
        }
    }

    /// Get all valid next states from a given state.
    #[must_use]
    pub fn valid_next_states(from: ApplicationStatus) -> Vec<ApplicationStatus> {
        match from {
            ApplicationStatus::Preliminary => vec![ApplicationStatus::AwaitingOrder],
            ApplicationStatus::AwaitingOrder => vec![
                ApplicationStatus::Complete,
                ApplicationStatus::OrderFailed,
            ],
            // Terminal states
            ApplicationStatus::Complete | ApplicationStatus::OrderFailed => vec![],
        }
    }
}
