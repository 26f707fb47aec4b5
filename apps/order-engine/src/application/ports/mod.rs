//! Ports - interfaces for external systems.

mod ordering_port;
mod task_queue_port;

pub use ordering_port::{OrderPlacement, OrderingError, OrderingPort, PlaceOrderRequest};
pub use task_queue_port::{QueueError, SubmissionTask, TaskQueuePort};
