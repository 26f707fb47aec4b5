//! Plan value object - an immutable snapshot of a service offering.

use serde::{Deserialize, Serialize};

use super::PlanType;
use crate::domain::shared::{Money, PlanId};

/// A service plan as seen by the order pipeline.
///
/// Immutable from this pipeline's perspective: the fields are a snapshot of
/// the referenced plan row, carried with the application so payload
/// construction needs no follow-up reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    id: PlanId,
    plan_type: PlanType,
    name: String,
    monthly_cost: Money,
}

impl Plan {
    /// Create a plan snapshot.
    #[must_use]
    pub fn new(id: PlanId, plan_type: PlanType, name: impl Into<String>, monthly_cost: Money) -> Self {
        Self {
            id,
            plan_type,
            name: name.into(),
            monthly_cost,
        }
    }

    /// Plan identifier.
    #[must_use]
    pub const fn id(&self) -> PlanId {
        self.id
    }

    /// Service category.
    #[must_use]
    pub const fn plan_type(&self) -> PlanType {
        self.plan_type
    }

    /// Display name, sent verbatim to the ordering endpoint.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Monthly cost.
    #[must_use]
    pub const fn monthly_cost(&self) -> Money {
        self.monthly_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_snapshot_accessors() {
        let plan = Plan::new(
            PlanId::new(7),
            PlanType::Nbn,
            "NBN 100/20",
            Money::from_cents(5999),
        );

        assert_eq!(plan.id(), PlanId::new(7));
        assert_eq!(plan.plan_type(), PlanType::Nbn);
        assert_eq!(plan.name(), "NBN 100/20");
        assert_eq!(plan.monthly_cost().formatted(), "$59.99");
    }
}
