//! Dispatch Scheduler Service
//!
//! Periodic invocation of the dispatch coordinator. Each tick is one full
//! coordinator run; the interval is wall-clock and does not wait for the
//! workers the run enqueued.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::application::ports::TaskQueuePort;
use crate::application::use_cases::DispatchOrdersUseCase;
use crate::domain::order_processing::repository::ApplicationRepository;

/// Configuration for the dispatch scheduler service.
#[derive(Debug, Clone)]
pub struct DispatchSchedulerConfig {
    /// Whether scheduled dispatch is enabled.
    pub enabled: bool,
    /// Seconds between coordinator runs.
    pub interval_secs: u64,
}

impl Default for DispatchSchedulerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            interval_secs: 300,
        }
    }
}

/// Background service running the coordinator on an interval.
pub struct DispatchSchedulerService<R, Q>
where
    R: ApplicationRepository + 'static,
    Q: TaskQueuePort + 'static,
{
    config: DispatchSchedulerConfig,
    dispatch: Arc<DispatchOrdersUseCase<R, Q>>,
    shutdown: CancellationToken,
}

impl<R, Q> DispatchSchedulerService<R, Q>
where
    R: ApplicationRepository + 'static,
    Q: TaskQueuePort + 'static,
{
    /// Create a scheduler around a coordinator.
    pub const fn new(
        config: DispatchSchedulerConfig,
        dispatch: Arc<DispatchOrdersUseCase<R, Q>>,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            config,
            dispatch,
            shutdown,
        }
    }

    /// Spawn the interval loop. Returns `None` when disabled by config.
    pub fn start(&self) -> Option<JoinHandle<()>> {
        if !self.config.enabled {
            tracing::info!("Dispatch scheduler disabled");
            return None;
        }

        let interval_duration = Duration::from_secs(self.config.interval_secs);
        let dispatch = Arc::clone(&self.dispatch);
        let shutdown = self.shutdown.clone();

        tracing::info!(
            interval_secs = self.config.interval_secs,
            "Dispatch scheduler started"
        );

        Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(interval_duration);

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        match dispatch.execute().await {
                            Ok(summary) if summary.is_empty() => {
                                tracing::debug!("Scheduled dispatch found no work");
                            }
                            Ok(summary) => {
                                tracing::info!(
                                    found = summary.found,
                                    dispatched = summary.dispatched,
                                    "Scheduled dispatch run complete"
                                );
                            }
                            Err(e) => {
                                tracing::error!(error = %e, "Scheduled dispatch run failed");
                            }
                        }
                    }
                    () = shutdown.cancelled() => {
                        tracing::info!("Dispatch scheduler shutting down");
                        break;
                    }
                }
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::InMemoryApplicationRepository;
    use crate::infrastructure::queue::RecordingTaskQueue;

    #[test]
    fn default_config_is_disabled() {
        let config = DispatchSchedulerConfig::default();
        assert!(!config.enabled);
        assert_eq!(config.interval_secs, 300);
    }

    #[tokio::test]
    async fn disabled_scheduler_does_not_spawn() {
        let repo = Arc::new(InMemoryApplicationRepository::new());
        let queue = Arc::new(RecordingTaskQueue::new());
        let dispatch = Arc::new(DispatchOrdersUseCase::new(repo, queue));

        let scheduler = DispatchSchedulerService::new(
            DispatchSchedulerConfig::default(),
            dispatch,
            CancellationToken::new(),
        );

        assert!(scheduler.start().is_none());
    }

    #[tokio::test]
    async fn cancellation_stops_the_loop() {
        let repo = Arc::new(InMemoryApplicationRepository::new());
        let queue = Arc::new(RecordingTaskQueue::new());
        let dispatch = Arc::new(DispatchOrdersUseCase::new(repo, queue));
        let shutdown = CancellationToken::new();

        let scheduler = DispatchSchedulerService::new(
            DispatchSchedulerConfig {
                enabled: true,
                interval_secs: 3600,
            },
            dispatch,
            shutdown.clone(),
        );

        let handle = scheduler.start().unwrap();
        shutdown.cancel();
        handle.await.unwrap();
    }
}
