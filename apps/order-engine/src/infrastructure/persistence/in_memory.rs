//! In-memory application repository for testing.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::order_processing::aggregate::{Application, ReconstitutedApplicationParams};
use crate::domain::order_processing::errors::ApplicationError;
use crate::domain::order_processing::repository::{ApplicationPage, ApplicationRepository};
use crate::domain::order_processing::value_objects::{ApplicationStatus, PlanType};
use crate::domain::shared::{ApplicationId, OrderId};

/// In-memory implementation of `ApplicationRepository`.
///
/// Suitable for testing and development. Not for production use.
#[derive(Debug, Default)]
pub struct InMemoryApplicationRepository {
    applications: RwLock<HashMap<i64, Application>>,
}

impl InMemoryApplicationRepository {
    /// Create a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            applications: RwLock::new(HashMap::new()),
        }
    }

    /// Get the number of applications in the repository.
    #[must_use]
    pub fn len(&self) -> usize {
        self.applications.read().unwrap().len()
    }

    /// Check if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.applications.read().unwrap().is_empty()
    }

    /// Clear all applications from the repository.
    pub fn clear(&self) {
        let mut applications = self.applications.write().unwrap();
        applications.clear();
    }

    /// Add an application to the repository (for test setup).
    pub fn add(&self, application: Application) {
        let mut applications = self.applications.write().unwrap();
        applications.insert(application.id().value(), application);
    }

    /// Rebuild a stored application with a new status/order-id pair while
    /// holding the write lock, so the update is a single operation.
    fn apply_update(
        stored: &Application,
        status: ApplicationStatus,
        order_id: Option<OrderId>,
    ) -> Result<Application, ApplicationError> {
        Application::reconstitute(ReconstitutedApplicationParams {
            id: stored.id(),
            customer: stored.customer().clone(),
            address: stored.address().clone(),
            plan: stored.plan().clone(),
            status,
            order_id,
            created_at: stored.created_at(),
        })
    }
}

#[async_trait]
impl ApplicationRepository for InMemoryApplicationRepository {
    async fn find_ready_for_ordering(
        &self,
        plan_type: PlanType,
    ) -> Result<Vec<Application>, ApplicationError> {
        let applications = self.applications.read().unwrap();
        Ok(applications
            .values()
            .filter(|a| a.is_ready_for_ordering(plan_type))
            .cloned()
            .collect())
    }

    async fn find_by_id(
        &self,
        id: ApplicationId,
    ) -> Result<Option<Application>, ApplicationError> {
        let applications = self.applications.read().unwrap();
        Ok(applications.get(&id.value()).cloned())
    }

    async fn mark_completed(
        &self,
        id: ApplicationId,
        order_id: &OrderId,
    ) -> Result<(), ApplicationError> {
        let mut applications = self.applications.write().unwrap();
        let stored = applications
            .get(&id.value())
            .ok_or(ApplicationError::NotFound {
                application_id: id.value(),
            })?;

        let updated = Self::apply_update(
            stored,
            ApplicationStatus::Complete,
            Some(order_id.clone()),
        )?;
        applications.insert(id.value(), updated);
        Ok(())
    }

    async fn mark_order_failed(&self, id: ApplicationId) -> Result<(), ApplicationError> {
        let mut applications = self.applications.write().unwrap();
        let stored = applications
            .get(&id.value())
            .ok_or(ApplicationError::NotFound {
                application_id: id.value(),
            })?;

        let order_id = stored.order_id().cloned();
        let updated = Self::apply_update(stored, ApplicationStatus::OrderFailed, order_id)?;
        applications.insert(id.value(), updated);
        Ok(())
    }

    async fn list_page(
        &self,
        plan_type: Option<PlanType>,
        page: u32,
        per_page: u32,
    ) -> Result<ApplicationPage, ApplicationError> {
        let applications = self.applications.read().unwrap();

        let mut matching: Vec<Application> = applications
            .values()
            .filter(|a| plan_type.is_none_or(|t| a.plan().plan_type() == t))
            .cloned()
            .collect();

        matching.sort_by_key(|a| (a.created_at(), a.id()));

        let total = matching.len() as u64;
        let offset = (page.saturating_sub(1) as usize) * per_page as usize;
        let page_items = matching
            .into_iter()
            .skip(offset)
            .take(per_page as usize)
            .collect();

        Ok(ApplicationPage {
            applications: page_items,
            total,
        })
    }
}
