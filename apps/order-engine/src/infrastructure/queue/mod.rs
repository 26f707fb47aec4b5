//! Task queue adapters.

mod recording;
mod tokio_queue;

pub use recording::RecordingTaskQueue;
pub use tokio_queue::TokioSubmissionQueue;
