//! Application use cases.

mod dispatch_orders;
mod submit_order;

pub use dispatch_orders::{DispatchError, DispatchOrdersUseCase, DispatchSummary};
pub use submit_order::{SubmitOrderUseCase, SubmissionOutcome};
