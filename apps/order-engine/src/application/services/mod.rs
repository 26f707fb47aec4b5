//! Long-running application services.

mod dispatch_scheduler;

pub use dispatch_scheduler::{DispatchSchedulerConfig, DispatchSchedulerService};
