//! Order processing errors.

use thiserror::Error;

use super::value_objects::ApplicationStatus;

/// Errors that can occur when working with applications.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    /// Invalid status transition attempted.
    #[error("invalid status transition from {from} to {to}: {reason}")]
    InvalidStateTransition {
        /// Current application status.
        from: ApplicationStatus,
        /// Attempted status.
        to: ApplicationStatus,
        /// Reason for failure.
        reason: String,
    },

    /// Stored record violates a domain invariant.
    #[error("integrity error for application {application_id}: {message}")]
    Integrity {
        /// Application ID.
        application_id: i64,
        /// Invariant description.
        message: String,
    },

    /// Application not found.
    #[error("application not found: {application_id}")]
    NotFound {
        /// Application ID.
        application_id: i64,
    },

    /// Persistence layer failure.
    #[error("persistence error: {message}")]
    Persistence {
        /// Error details.
        message: String,
    },
}
