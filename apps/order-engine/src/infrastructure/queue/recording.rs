//! Recording task queue for testing.
//!
//! Accepts tasks without running them, so tests can assert exactly what a
//! coordinator invocation enqueued.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{QueueError, SubmissionTask, TaskQueuePort};
use crate::domain::order_processing::aggregate::Application;

/// Test double that records submitted tasks.
#[derive(Debug, Default)]
pub struct RecordingTaskQueue {
    tasks: Mutex<Vec<SubmissionTask>>,
    closed: bool,
}

impl RecordingTaskQueue {
    /// Create an open recording queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a queue that rejects every submission.
    #[must_use]
    pub fn closed() -> Self {
        Self {
            tasks: Mutex::new(Vec::new()),
            closed: true,
        }
    }

    /// Number of tasks accepted so far.
    #[must_use]
    pub fn submitted_count(&self) -> usize {
        self.tasks.lock().unwrap().len()
    }

    /// Applications of the accepted tasks, in submission order.
    #[must_use]
    pub fn submitted_applications(&self) -> Vec<Application> {
        self.tasks
            .lock()
            .unwrap()
            .iter()
            .map(|task| task.application().clone())
            .collect()
    }
}

#[async_trait]
impl TaskQueuePort for RecordingTaskQueue {
    async fn submit(&self, task: SubmissionTask) -> Result<(), QueueError> {
        if self.closed {
            return Err(QueueError::Closed);
        }
        self.tasks.lock().unwrap().push(task);
        Ok(())
    }
}
