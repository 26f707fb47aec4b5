// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Order Engine - NBN Order Processing Core
//!
//! Places NBN service orders on behalf of customers: selects applications
//! awaiting order placement, submits them to the wholesale B2B ordering
//! endpoint, and records the terminal outcome on each application.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic
//!   - `order_processing`: Application aggregate, status lifecycle,
//!     repository port
//!   - `shared`: Typed identifiers, money
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: Interfaces for external systems (`OrderingPort`,
//!     `TaskQueuePort`)
//!   - `use_cases`: `SubmitOrder` (the worker), `DispatchOrders` (the
//!     coordinator)
//!   - `services`: Interval dispatch scheduler
//!   - `dto`: Listing projections for the API boundary
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `ordering`: B2B wholesale endpoint adapter
//!   - `persistence`: Application repository (PostgreSQL, in-memory)
//!   - `queue`: Tokio submission queue
//!   - `http`: Read-only listing API

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Configuration loading and validation.
pub mod config;

/// Metrics and operational visibility.
pub mod observability;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::order_processing::{
    aggregate::Application,
    repository::{ApplicationPage, ApplicationRepository},
    services::ApplicationStateMachine,
    value_objects::{ApplicationStatus, Customer, Plan, PlanType, ServiceAddress},
};
pub use domain::shared::{ApplicationId, CustomerId, Money, OrderId, PlanId};

// Application re-exports
pub use application::dto::ApplicationListItemDto;
pub use application::ports::{
    OrderPlacement, OrderingError, OrderingPort, PlaceOrderRequest, QueueError, SubmissionTask,
    TaskQueuePort,
};
pub use application::use_cases::{
    DispatchError, DispatchOrdersUseCase, DispatchSummary, SubmissionOutcome, SubmitOrderUseCase,
};

// Infrastructure re-exports
pub use infrastructure::http::{AppState, create_router};
pub use infrastructure::ordering::b2b::{B2bConfig, B2bError, B2bOrderingAdapter};
pub use infrastructure::persistence::{
    InMemoryApplicationRepository, PostgresApplicationRepository,
};
pub use infrastructure::queue::TokioSubmissionQueue;
