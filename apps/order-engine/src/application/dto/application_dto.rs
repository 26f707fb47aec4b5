//! Listing DTO for applications.

use serde::{Deserialize, Serialize};

use crate::domain::order_processing::aggregate::Application;
use crate::domain::order_processing::value_objects::{ApplicationStatus, PlanType};

/// One application as presented by the listing API.
///
/// `order_id` is serialized only for completed applications - the key is
/// omitted entirely otherwise, not set to null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationListItemDto {
    /// Application ID.
    pub id: i64,
    /// Customer display name.
    pub customer_full_name: String,
    /// Single-line service address.
    pub address: String,
    /// Plan service category.
    pub plan_type: PlanType,
    /// Plan display name.
    pub plan_name: String,
    /// State or territory.
    pub state: String,
    /// Monthly cost formatted as currency.
    pub plan_monthly_cost: String,
    /// External order identifier, present only when complete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

impl ApplicationListItemDto {
    /// Project an application into its listing form.
    #[must_use]
    pub fn from_application(application: &Application) -> Self {
        let order_id = if application.status() == ApplicationStatus::Complete {
            application.order_id().map(|id| id.as_str().to_string())
        } else {
            None
        };

        Self {
            id: application.id().value(),
            customer_full_name: application.customer().full_name(),
            address: application.address().single_line(),
            plan_type: application.plan().plan_type(),
            plan_name: application.plan().name().to_string(),
            state: application.address().state().to_string(),
            plan_monthly_cost: application.plan().monthly_cost().formatted(),
            order_id,
        }
    }
}
