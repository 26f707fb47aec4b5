//! Task Queue Port (Driven Port)
//!
//! Interface the dispatch coordinator uses to hand submission work to the
//! asynchronous queue. The queue contract: at-least-once delivery, no
//! ordering guarantee between tasks, no automatic retry.

use async_trait::async_trait;

use crate::domain::order_processing::aggregate::Application;

/// One unit of submission work: place the order for a single application.
#[derive(Debug, Clone)]
pub struct SubmissionTask {
    application: Application,
}

impl SubmissionTask {
    /// Create a task for one application.
    #[must_use]
    pub const fn new(application: Application) -> Self {
        Self { application }
    }

    /// The application to submit.
    #[must_use]
    pub const fn application(&self) -> &Application {
        &self.application
    }

    /// Consume the task, yielding the application.
    #[must_use]
    pub fn into_application(self) -> Application {
        self.application
    }
}

/// Task queue error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum QueueError {
    /// The queue is no longer accepting tasks.
    #[error("task queue is closed")]
    Closed,

    /// The task could not be enqueued.
    #[error("failed to enqueue task: {message}")]
    SubmitFailed {
        /// Error details.
        message: String,
    },
}

/// Port for enqueuing submission tasks.
///
/// `submit` returns once the task is accepted; it never waits for the task
/// to run. Task outcomes are observed through application status changes.
#[async_trait]
pub trait TaskQueuePort: Send + Sync {
    /// Enqueue one submission task, fire-and-forget.
    ///
    /// # Errors
    ///
    /// Returns error if the task cannot be accepted by the queue.
    async fn submit(&self, task: SubmissionTask) -> Result<(), QueueError>;
}
