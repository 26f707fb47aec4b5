//! Aggregates for order processing.

mod application;

pub use application::{Application, ReconstitutedApplicationParams};
