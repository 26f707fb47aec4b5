//! Value objects for the order processing context.

mod application_status;
mod customer;
mod plan;
mod plan_type;
mod service_address;

pub use application_status::ApplicationStatus;
pub use customer::Customer;
pub use plan::Plan;
pub use plan_type::{PlanType, UnknownPlanType};
pub use service_address::ServiceAddress;
