//! Tokio-backed submission queue.
//!
//! Fire-and-forget task pool: `submit` spawns the worker invocation and
//! returns immediately; a semaphore bounds how many submissions run at
//! once. Delivery is at-least-once within the process, tasks are isolated
//! from each other, and nothing is retried automatically.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Semaphore;
use tokio_util::task::TaskTracker;

use crate::application::ports::{OrderingPort, QueueError, SubmissionTask, TaskQueuePort};
use crate::application::use_cases::SubmitOrderUseCase;
use crate::domain::order_processing::repository::ApplicationRepository;

/// Task queue running submission workers on the Tokio runtime.
pub struct TokioSubmissionQueue<N, R>
where
    N: OrderingPort + 'static,
    R: ApplicationRepository + 'static,
{
    worker: Arc<SubmitOrderUseCase<N, R>>,
    semaphore: Arc<Semaphore>,
    tracker: TaskTracker,
}

impl<N, R> TokioSubmissionQueue<N, R>
where
    N: OrderingPort + 'static,
    R: ApplicationRepository + 'static,
{
    /// Create a queue with a concurrency bound.
    #[must_use]
    pub fn new(worker: Arc<SubmitOrderUseCase<N, R>>, max_concurrent: usize) -> Self {
        Self {
            worker,
            semaphore: Arc::new(Semaphore::new(max_concurrent)),
            tracker: TaskTracker::new(),
        }
    }

    /// Stop accepting tasks and wait for every in-flight submission.
    ///
    /// The coordinator never calls this; it exists so the one-shot CLI can
    /// let spawned workers finish before the process exits.
    pub async fn drain(&self) {
        self.tracker.close();
        self.tracker.wait().await;
    }
}

#[async_trait]
impl<N, R> TaskQueuePort for TokioSubmissionQueue<N, R>
where
    N: OrderingPort + 'static,
    R: ApplicationRepository + 'static,
{
    async fn submit(&self, task: SubmissionTask) -> Result<(), QueueError> {
        if self.tracker.is_closed() {
            return Err(QueueError::Closed);
        }

        let worker = Arc::clone(&self.worker);
        let semaphore = Arc::clone(&self.semaphore);

        self.tracker.spawn(async move {
            let permit = match semaphore.acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => {
                    tracing::error!("Submission queue semaphore closed, dropping task");
                    return;
                }
            };

            let application = task.into_application();
            worker.execute(application).await;

            drop(permit);
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{OrderPlacement, OrderingError, PlaceOrderRequest};
    use crate::domain::order_processing::aggregate::{
        Application, ReconstitutedApplicationParams,
    };
    use crate::domain::order_processing::value_objects::{
        ApplicationStatus, Customer, Plan, PlanType, ServiceAddress,
    };
    use crate::domain::shared::{ApplicationId, CustomerId, Money, OrderId, PlanId};
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use crate::infrastructure::persistence::InMemoryApplicationRepository;

    // Ordering stub that records peak concurrency.
    struct SlowOrdering {
        current: AtomicUsize,
        peak: AtomicUsize,
    }

    impl SlowOrdering {
        fn new() -> Self {
            Self {
                current: AtomicUsize::new(0),
                peak: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl OrderingPort for SlowOrdering {
        async fn place_order(
            &self,
            _request: PlaceOrderRequest,
        ) -> Result<OrderPlacement, OrderingError> {
            let running = self.current.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(running, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            self.current.fetch_sub(1, Ordering::SeqCst);
            Ok(OrderPlacement {
                order_id: OrderId::new("ORD000000000000"),
            })
        }
    }

    fn awaiting_application(id: i64) -> Application {
        Application::reconstitute(ReconstitutedApplicationParams {
            id: ApplicationId::new(id),
            customer: Customer::new(CustomerId::new(id), "Jane", None),
            address: ServiceAddress::new("123 Main St", None, "Melbourne", "VIC", "3000"),
            plan: Plan::new(
                PlanId::new(id),
                PlanType::Nbn,
                "NBN 100/20",
                Money::from_cents(5999),
            ),
            status: ApplicationStatus::AwaitingOrder,
            order_id: None,
            created_at: Utc::now(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn submitted_tasks_run_to_completion_after_drain() {
        let ordering = Arc::new(SlowOrdering::new());
        let repo = Arc::new(InMemoryApplicationRepository::new());
        for id in 1..=4 {
            repo.add(awaiting_application(id));
        }
        let worker = Arc::new(SubmitOrderUseCase::new(ordering, Arc::clone(&repo)));
        let queue = TokioSubmissionQueue::new(worker, 2);

        for id in 1..=4 {
            queue
                .submit(SubmissionTask::new(awaiting_application(id)))
                .await
                .unwrap();
        }
        queue.drain().await;

        for id in 1..=4 {
            let stored = repo
                .find_by_id(ApplicationId::new(id))
                .await
                .unwrap()
                .unwrap();
            assert_eq!(stored.status(), ApplicationStatus::Complete);
        }
    }

    #[tokio::test]
    async fn concurrency_stays_within_bound() {
        let ordering = Arc::new(SlowOrdering::new());
        let repo = Arc::new(InMemoryApplicationRepository::new());
        for id in 1..=6 {
            repo.add(awaiting_application(id));
        }
        let worker = Arc::new(SubmitOrderUseCase::new(Arc::clone(&ordering), repo));
        let queue = TokioSubmissionQueue::new(worker, 2);

        for id in 1..=6 {
            queue
                .submit(SubmissionTask::new(awaiting_application(id)))
                .await
                .unwrap();
        }
        queue.drain().await;

        assert!(ordering.peak.load(Ordering::SeqCst) <= 2);
    }

    #[tokio::test]
    async fn submit_after_drain_is_rejected() {
        let ordering = Arc::new(SlowOrdering::new());
        let repo = Arc::new(InMemoryApplicationRepository::new());
        let worker = Arc::new(SubmitOrderUseCase::new(ordering, repo));
        let queue = TokioSubmissionQueue::new(worker, 2);

        queue.drain().await;

        let err = queue
            .submit(SubmissionTask::new(awaiting_application(1)))
            .await
            .unwrap_err();
        assert!(matches!(err, QueueError::Closed));
    }
}
