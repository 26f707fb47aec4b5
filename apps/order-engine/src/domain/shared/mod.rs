//! Shared kernel - value objects common to all domain contexts.

pub mod value_objects;

pub use value_objects::{ApplicationId, CustomerId, Money, OrderId, PlanId};
