//! Ordering Port (Driven Port)
//!
//! Interface for placing service orders with the external B2B endpoint.

use async_trait::async_trait;

use crate::domain::shared::OrderId;

/// Request to place a service order.
///
/// Carries exactly the fields the wholesale ordering contract needs; wire
/// formatting is the adapter's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceOrderRequest {
    /// First address line.
    pub address_1: String,
    /// Second address line, if any.
    pub address_2: Option<String>,
    /// City or suburb.
    pub city: String,
    /// State or territory.
    pub state: String,
    /// Postcode.
    pub postcode: String,
    /// Plan display name.
    pub plan_name: String,
}

/// Confirmation returned by the ordering endpoint on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderPlacement {
    /// Order identifier assigned by the endpoint.
    pub order_id: OrderId,
}

/// Ordering port error.
///
/// Transport and business failures are distinguished for logging only; the
/// worker resolves every variant to the same `OrderFailed` outcome.
#[derive(Debug, Clone, thiserror::Error)]
pub enum OrderingError {
    /// Endpoint unreachable, connection dropped, or request timed out.
    #[error("ordering endpoint connection error: {message}")]
    Connection {
        /// Error details.
        message: String,
    },

    /// Endpoint responded with a non-success HTTP status.
    #[error("ordering endpoint returned HTTP {status}")]
    Http {
        /// HTTP status code.
        status: u16,
    },

    /// Response body could not be interpreted.
    #[error("malformed ordering response: {message}")]
    MalformedResponse {
        /// Error details.
        message: String,
    },

    /// Endpoint processed the request but did not report success.
    #[error("order rejected with status {status:?}")]
    Rejected {
        /// The status token reported by the endpoint.
        status: String,
    },
}

impl OrderingError {
    /// Returns true if the endpoint was never successfully reached.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Connection { .. } | Self::Http { .. })
    }
}

/// Port for placing orders with the external endpoint.
///
/// One invocation is one attempt: implementations must not retry
/// internally. Retries happen, if at all, through external re-selection.
#[async_trait]
pub trait OrderingPort: Send + Sync {
    /// Place a single service order.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success HTTP status,
    /// malformed response, or a non-success status token.
    async fn place_order(&self, request: PlaceOrderRequest)
    -> Result<OrderPlacement, OrderingError>;
}
