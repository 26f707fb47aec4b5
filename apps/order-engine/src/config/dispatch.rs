//! Dispatch configuration.

use serde::{Deserialize, Serialize};

use crate::application::services::DispatchSchedulerConfig;

/// Dispatch coordinator and worker-pool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Whether the interval scheduler runs in serve mode.
    #[serde(default)]
    pub scheduler_enabled: bool,
    /// Seconds between scheduled coordinator runs.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    /// Maximum submissions running concurrently.
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            scheduler_enabled: false,
            interval_secs: default_interval_secs(),
            max_concurrent: default_max_concurrent(),
        }
    }
}

impl DispatchConfig {
    /// Build the scheduler service configuration.
    #[must_use]
    pub const fn scheduler_config(&self) -> DispatchSchedulerConfig {
        DispatchSchedulerConfig {
            enabled: self.scheduler_enabled,
            interval_secs: self.interval_secs,
        }
    }
}

const fn default_interval_secs() -> u64 {
    300
}

const fn default_max_concurrent() -> usize {
    4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = DispatchConfig::default();
        assert!(!config.scheduler_enabled);
        assert_eq!(config.interval_secs, 300);
        assert_eq!(config.max_concurrent, 4);
    }

    #[test]
    fn scheduler_config_mirrors_fields() {
        let config = DispatchConfig {
            scheduler_enabled: true,
            interval_secs: 60,
            max_concurrent: 8,
        };
        let scheduler = config.scheduler_config();
        assert!(scheduler.enabled);
        assert_eq!(scheduler.interval_secs, 60);
    }
}
