//! B2B ordering endpoint configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::infrastructure::ordering::b2b::B2bConfig;

/// Ordering endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderingConfig {
    /// B2B ordering endpoint URL.
    #[serde(default)]
    pub endpoint_url: String,
    /// Outbound request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OrderingConfig {
    fn default() -> Self {
        Self {
            endpoint_url: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl OrderingConfig {
    /// Build the adapter configuration.
    #[must_use]
    pub fn b2b_config(&self) -> B2bConfig {
        B2bConfig::new(self.endpoint_url.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

const fn default_timeout_secs() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = OrderingConfig::default();
        assert!(config.endpoint_url.is_empty());
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn b2b_config_carries_timeout() {
        let config = OrderingConfig {
            endpoint_url: "https://b2b.nbn.example/orders".to_string(),
            timeout_secs: 5,
        };
        let b2b = config.b2b_config();
        assert_eq!(b2b.endpoint_url, "https://b2b.nbn.example/orders");
        assert_eq!(b2b.timeout, Duration::from_secs(5));
    }
}
