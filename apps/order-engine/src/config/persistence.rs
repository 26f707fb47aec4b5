//! Database configuration.

use serde::{Deserialize, Serialize};

/// Persistence configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistenceConfig {
    /// PostgreSQL connection URL.
    #[serde(default)]
    pub database_url: String,
    /// Maximum connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            max_connections: default_max_connections(),
        }
    }
}

const fn default_max_connections() -> u32 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = PersistenceConfig::default();
        assert!(config.database_url.is_empty());
        assert_eq!(config.max_connections, 5);
    }
}
