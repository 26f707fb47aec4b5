//! B2B ordering adapter configuration.

use std::time::Duration;

/// Configuration for the B2B ordering adapter.
#[derive(Debug, Clone)]
pub struct B2bConfig {
    /// Ordering endpoint URL.
    pub endpoint_url: String,
    /// HTTP request timeout; exceeding it is a failure, never a retry.
    pub timeout: Duration,
}

impl B2bConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a new configuration.
    #[must_use]
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Set the HTTP timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_creation() {
        let config = B2bConfig::new("https://b2b.nbn.example/orders");
        assert_eq!(config.endpoint_url, "https://b2b.nbn.example/orders");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn config_with_timeout() {
        let config =
            B2bConfig::new("https://b2b.nbn.example/orders").with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
