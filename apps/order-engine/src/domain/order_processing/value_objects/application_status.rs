//! Application status in the order lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of an application as it moves through order placement.
///
/// `Preliminary` (and anything before it) is produced upstream; this
/// pipeline only ever moves an application from `AwaitingOrder` to one of
/// the two terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    /// Application captured but not yet ready for ordering.
    Preliminary,
    /// Ready for order placement; eligible for dispatch.
    AwaitingOrder,
    /// Order placed successfully; `order_id` is recorded.
    Complete,
    /// Order placement failed; awaiting external recovery.
    OrderFailed,
}

impl ApplicationStatus {
    /// Returns true if the status is terminal for this pipeline.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete | Self::OrderFailed)
    }

    /// Returns true if an application in this status can be dispatched.
    #[must_use]
    pub const fn is_awaiting_order(&self) -> bool {
        matches!(self, Self::AwaitingOrder)
    }

    /// Storage representation used by the applications table.
    #[must_use]
    pub const fn as_db_str(&self) -> &'static str {
        match self {
            Self::Preliminary => "preliminary",
            Self::AwaitingOrder => "awaiting_order",
            Self::Complete => "complete",
            Self::OrderFailed => "order_failed",
        }
    }

    /// Parse the storage representation.
    #[must_use]
    pub fn from_db_str(value: &str) -> Option<Self> {
        match value {
            "preliminary" => Some(Self::Preliminary),
            "awaiting_order" => Some(Self::AwaitingOrder),
            "complete" => Some(Self::Complete),
            "order_failed" => Some(Self::OrderFailed),
            _ => None,
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preliminary => write!(f, "PRELIMINARY"),
            Self::AwaitingOrder => write!(f, "AWAITING_ORDER"),
            Self::Complete => write!(f, "COMPLETE"),
            Self::OrderFailed => write!(f, "ORDER_FAILED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_terminal() {
        assert!(!ApplicationStatus::Preliminary.is_terminal());
        assert!(!ApplicationStatus::AwaitingOrder.is_terminal());
        assert!(ApplicationStatus::Complete.is_terminal());
        assert!(ApplicationStatus::OrderFailed.is_terminal());
    }

    #[test]
    fn only_awaiting_order_is_dispatchable() {
        assert!(ApplicationStatus::AwaitingOrder.is_awaiting_order());
        assert!(!ApplicationStatus::Preliminary.is_awaiting_order());
        assert!(!ApplicationStatus::Complete.is_awaiting_order());
        assert!(!ApplicationStatus::OrderFailed.is_awaiting_order());
    }

    #[test]
    fn db_string_round_trip() {
        for status in [
            ApplicationStatus::Preliminary,
            ApplicationStatus::AwaitingOrder,
            ApplicationStatus::Complete,
            ApplicationStatus::OrderFailed,
        ] {
            assert_eq!(
                ApplicationStatus::from_db_str(status.as_db_str()),
                Some(status)
            );
        }
    }

    #[test]
    fn unknown_db_string_is_rejected() {
        assert_eq!(ApplicationStatus::from_db_str("cancelled"), None);
    }

    #[test]
    fn status_display() {
        assert_eq!(
            format!("{}", ApplicationStatus::AwaitingOrder),
            "AWAITING_ORDER"
        );
        assert_eq!(format!("{}", ApplicationStatus::OrderFailed), "ORDER_FAILED");
    }

    #[test]
    fn status_serde() {
        let json = serde_json::to_string(&ApplicationStatus::AwaitingOrder).unwrap();
        assert_eq!(json, "\"awaiting_order\"");

        let parsed: ApplicationStatus = serde_json::from_str("\"complete\"").unwrap();
        assert_eq!(parsed, ApplicationStatus::Complete);
    }
}
