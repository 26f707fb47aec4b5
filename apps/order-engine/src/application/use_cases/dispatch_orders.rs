//! Dispatch Orders Use Case
//!
//! One coordinator invocation: select the applications ready for NBN
//! ordering and hand each one to the task queue. Worker outcomes are
//! observed asynchronously through status changes, never here.

use std::sync::Arc;

use crate::application::ports::{QueueError, SubmissionTask, TaskQueuePort};
use crate::domain::order_processing::errors::ApplicationError;
use crate::domain::order_processing::repository::ApplicationRepository;
use crate::domain::order_processing::value_objects::PlanType;
use crate::observability::record_dispatch_run;

/// Counts reported by one coordinator invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchSummary {
    /// Applications returned by the eligibility selection.
    pub found: usize,
    /// Tasks accepted by the queue.
    pub dispatched: usize,
}

impl DispatchSummary {
    /// Returns true if the selection found no work.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.found == 0
    }
}

/// Dispatch error - the only faults that abort a coordinator run.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The eligibility selection could not be read.
    #[error("application selection failed: {0}")]
    Selection(#[source] ApplicationError),

    /// A task could not be enqueued.
    #[error("task enqueue failed: {0}")]
    Enqueue(#[source] QueueError),
}

/// Use case coordinating one dispatch run.
///
/// Selection runs once per invocation; each selected application maps to
/// exactly one enqueued task. The coordinator never mutates applications
/// and never waits for worker completion. Overlapping invocations are not
/// mutually excluded - see the repository-level selection contract.
pub struct DispatchOrdersUseCase<R, Q>
where
    R: ApplicationRepository,
    Q: TaskQueuePort,
{
    application_repo: Arc<R>,
    queue: Arc<Q>,
    target_plan_type: PlanType,
}

impl<R, Q> DispatchOrdersUseCase<R, Q>
where
    R: ApplicationRepository,
    Q: TaskQueuePort,
{
    /// Create a coordinator targeting NBN applications.
    pub const fn new(application_repo: Arc<R>, queue: Arc<Q>) -> Self {
        Self {
            application_repo,
            queue,
            target_plan_type: PlanType::Nbn,
        }
    }

    /// Execute one dispatch run.
    ///
    /// # Errors
    ///
    /// Returns error if selection or enqueuing faults; worker outcomes
    /// never surface here.
    pub async fn execute(&self) -> Result<DispatchSummary, DispatchError> {
        let applications = self
            .application_repo
            .find_ready_for_ordering(self.target_plan_type)
            .await
            .map_err(DispatchError::Selection)?;

        let found = applications.len();

        if found == 0 {
            tracing::info!("No NBN applications to process");
            record_dispatch_run(0);
            return Ok(DispatchSummary::default());
        }

        tracing::info!(count = found, "Processing NBN applications");

        let mut dispatched = 0;
        for application in applications {
            let application_id = application.id();
            self.queue
                .submit(SubmissionTask::new(application))
                .await
                .map_err(DispatchError::Enqueue)?;
            tracing::debug!(application_id = %application_id, "Submission task enqueued");
            dispatched += 1;
        }

        tracing::info!(count = dispatched, "Dispatched submission tasks to queue");
        record_dispatch_run(dispatched);

        Ok(DispatchSummary { found, dispatched })
    }
}
