//! HTTP API adapters.

mod controller;
mod response;

pub use controller::{AppState, create_router};
pub use response::{
    ApplicationListResponse, HealthResponse, PageMeta, ValidationErrorResponse,
};
