//! Application Repository Trait
//!
//! Defines the persistence abstraction for applications.
//! Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;

use super::aggregate::Application;
use super::errors::ApplicationError;
use super::value_objects::PlanType;
use crate::domain::shared::{ApplicationId, OrderId};

/// One page of applications plus the total row count for the filter.
#[derive(Debug, Clone)]
pub struct ApplicationPage {
    /// Applications on this page, oldest first.
    pub applications: Vec<Application>,
    /// Total applications matching the filter across all pages.
    pub total: u64,
}

/// Repository trait for Application persistence.
///
/// This is a domain interface (port) that is implemented by
/// infrastructure adapters (Postgres, in-memory).
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Find applications eligible for order dispatch: plan type matches the
    /// target and status is `AwaitingOrder`. Plan and customer data are
    /// loaded eagerly; no side effects; result order is unspecified.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_ready_for_ordering(
        &self,
        plan_type: PlanType,
    ) -> Result<Vec<Application>, ApplicationError>;

    /// Find an application by its ID.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_id(
        &self,
        id: ApplicationId,
    ) -> Result<Option<Application>, ApplicationError>;

    /// Record a successful order placement: set status to `Complete` and
    /// store the external order identifier, as a single atomic write.
    ///
    /// # Errors
    ///
    /// Returns error if the application does not exist or the write fails.
    async fn mark_completed(
        &self,
        id: ApplicationId,
        order_id: &OrderId,
    ) -> Result<(), ApplicationError>;

    /// Record a failed order placement: set status to `OrderFailed`, leaving
    /// the order identifier untouched, as a single atomic write.
    ///
    /// # Errors
    ///
    /// Returns error if the application does not exist or the write fails.
    async fn mark_order_failed(&self, id: ApplicationId) -> Result<(), ApplicationError>;

    /// List applications oldest-first, optionally filtered by plan type.
    /// Pages are 1-based.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn list_page(
        &self,
        plan_type: Option<PlanType>,
        page: u32,
        per_page: u32,
    ) -> Result<ApplicationPage, ApplicationError>;
}
