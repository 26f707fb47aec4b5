//! Application Aggregate Root
//!
//! One customer's in-progress service order: the service address, the plan
//! snapshot, and the order placement status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::order_processing::errors::ApplicationError;
use crate::domain::order_processing::value_objects::{
    ApplicationStatus, Customer, Plan, PlanType, ServiceAddress,
};
use crate::domain::shared::{ApplicationId, OrderId};

/// Parameters for reconstituting an Application from storage.
///
/// Used by repositories to rebuild the aggregate from a persisted row with
/// plan and customer data already joined in.
#[derive(Debug, Clone)]
pub struct ReconstitutedApplicationParams {
    /// Application identifier.
    pub id: ApplicationId,
    /// The customer the application belongs to.
    pub customer: Customer,
    /// Service address.
    pub address: ServiceAddress,
    /// Plan snapshot.
    pub plan: Plan,
    /// Current status.
    pub status: ApplicationStatus,
    /// External order identifier, present only once complete.
    pub order_id: Option<OrderId>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// An application moving through order placement.
///
/// Created upstream in `Preliminary`; this pipeline only observes records
/// and records terminal outcomes through the repository. The aggregate
/// itself enforces the `order_id` / `Complete` invariant on reconstitution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    id: ApplicationId,
    customer: Customer,
    address: ServiceAddress,
    plan: Plan,
    status: ApplicationStatus,
    order_id: Option<OrderId>,
    created_at: DateTime<Utc>,
}

impl Application {
    /// Rebuild an application from persisted state.
    ///
    /// # Errors
    ///
    /// Returns an integrity error if the stored row carries an order
    /// identifier without the `Complete` status, or vice versa.
    pub fn reconstitute(params: ReconstitutedApplicationParams) -> Result<Self, ApplicationError> {
        let has_order_id = params.order_id.is_some();
        let is_complete = params.status == ApplicationStatus::Complete;

        if has_order_id != is_complete {
            return Err(ApplicationError::Integrity {
                application_id: params.id.value(),
                message: format!(
                    "order_id {} but status is {}",
                    if has_order_id { "present" } else { "absent" },
                    params.status
                ),
            });
        }

        Ok(Self {
            id: params.id,
            customer: params.customer,
            address: params.address,
            plan: params.plan,
            status: params.status,
            order_id: params.order_id,
            created_at: params.created_at,
        })
    }

    /// Application identifier.
    #[must_use]
    pub const fn id(&self) -> ApplicationId {
        self.id
    }

    /// The customer the application belongs to.
    #[must_use]
    pub const fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Service address.
    #[must_use]
    pub const fn address(&self) -> &ServiceAddress {
        &self.address
    }

    /// Plan snapshot.
    #[must_use]
    pub const fn plan(&self) -> &Plan {
        &self.plan
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> ApplicationStatus {
        self.status
    }

    /// External order identifier, present only once complete.
    #[must_use]
    pub const fn order_id(&self) -> Option<&OrderId> {
        self.order_id.as_ref()
    }

    /// Creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether this application is eligible for order dispatch.
    #[must_use]
    pub fn is_ready_for_ordering(&self, target: PlanType) -> bool {
        self.plan.plan_type() == target && self.status.is_awaiting_order()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::{CustomerId, Money, PlanId};

    fn params(
        status: ApplicationStatus,
        order_id: Option<OrderId>,
    ) -> ReconstitutedApplicationParams {
        ReconstitutedApplicationParams {
            id: ApplicationId::new(1),
            customer: Customer::new(CustomerId::new(1), "Jane", Some("Citizen".to_string())),
            address: ServiceAddress::new(
                "123 Main St",
                Some("Unit 5".to_string()),
                "Melbourne",
                "VIC",
                "3000",
            ),
            plan: Plan::new(
                PlanId::new(1),
                PlanType::Nbn,
                "NBN 100/20",
                Money::from_cents(5999),
            ),
            status,
            order_id,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn reconstitutes_awaiting_order_without_order_id() {
        let application =
            Application::reconstitute(params(ApplicationStatus::AwaitingOrder, None)).unwrap();
        assert_eq!(application.status(), ApplicationStatus::AwaitingOrder);
        assert!(application.order_id().is_none());
    }

    #[test]
    fn reconstitutes_complete_with_order_id() {
        let application = Application::reconstitute(params(
            ApplicationStatus::Complete,
            Some(OrderId::new("ORD000000000000")),
        ))
        .unwrap();
        assert_eq!(application.status(), ApplicationStatus::Complete);
        assert_eq!(
            application.order_id().map(OrderId::as_str),
            Some("ORD000000000000")
        );
    }

    #[test]
    fn rejects_order_id_on_non_complete_status() {
        let err = Application::reconstitute(params(
            ApplicationStatus::AwaitingOrder,
            Some(OrderId::new("ORD000000000000")),
        ))
        .unwrap_err();
        assert!(matches!(err, ApplicationError::Integrity { .. }));
    }

    #[test]
    fn rejects_complete_status_without_order_id() {
        let err =
            Application::reconstitute(params(ApplicationStatus::Complete, None)).unwrap_err();
        assert!(matches!(err, ApplicationError::Integrity { .. }));
    }

    #[test]
    fn order_failed_without_order_id_is_valid() {
        let application =
            Application::reconstitute(params(ApplicationStatus::OrderFailed, None)).unwrap();
        assert_eq!(application.status(), ApplicationStatus::OrderFailed);
    }

    #[test]
    fn readiness_requires_target_plan_type_and_status() {
        let ready =
            Application::reconstitute(params(ApplicationStatus::AwaitingOrder, None)).unwrap();
        assert!(ready.is_ready_for_ordering(PlanType::Nbn));
        assert!(!ready.is_ready_for_ordering(PlanType::Mobile));

        let failed =
            Application::reconstitute(params(ApplicationStatus::OrderFailed, None)).unwrap();
        assert!(!failed.is_ready_for_ordering(PlanType::Nbn));
    }
}
