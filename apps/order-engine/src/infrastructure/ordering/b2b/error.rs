//! B2B-specific error types.

use thiserror::Error;

use crate::application::ports::OrderingError;

/// Errors from the B2B HTTP layer.
///
/// Transport and protocol failures only; business-level rejection is
/// decided by the adapter from the parsed response body.
#[derive(Debug, Error, Clone)]
pub enum B2bError {
    /// Endpoint could not be reached or the request timed out.
    #[error("network error: {0}")]
    Network(String),

    /// Endpoint responded with a non-success HTTP status.
    #[error("API error: HTTP {status}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, for the log entry.
        body: String,
    },

    /// Response body could not be parsed.
    #[error("JSON parsing error: {0}")]
    JsonParse(String),

    /// The configured endpoint URL is unusable.
    #[error("invalid endpoint configuration: {0}")]
    InvalidEndpoint(String),
}

impl From<B2bError> for OrderingError {
    fn from(err: B2bError) -> Self {
        match err {
            B2bError::Network(message) | B2bError::InvalidEndpoint(message) => {
                Self::Connection { message }
            }
            B2bError::Api { status, .. } => Self::Http { status },
            B2bError::JsonParse(message) => Self::MalformedResponse { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_maps_to_connection() {
        let err: OrderingError = B2bError::Network("connection refused".to_string()).into();
        assert!(matches!(err, OrderingError::Connection { .. }));
        assert!(err.is_transport());
    }

    #[test]
    fn api_maps_to_http() {
        let err: OrderingError = B2bError::Api {
            status: 503,
            body: "Service Unavailable".to_string(),
        }
        .into();
        assert!(matches!(err, OrderingError::Http { status: 503 }));
    }

    #[test]
    fn json_parse_maps_to_malformed_response() {
        let err: OrderingError = B2bError::JsonParse("unexpected eof".to_string()).into();
        assert!(matches!(err, OrderingError::MalformedResponse { .. }));
        assert!(!err.is_transport());
    }
}
