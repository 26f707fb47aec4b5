//! Customer snapshot for an application.

use serde::{Deserialize, Serialize};

use crate::domain::shared::CustomerId;

/// The customer an application belongs to.
///
/// Last names are optional in the source system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    first_name: String,
    last_name: Option<String>,
}

impl Customer {
    /// Create a customer snapshot.
    #[must_use]
    pub fn new(id: CustomerId, first_name: impl Into<String>, last_name: Option<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name,
        }
    }

    /// Customer identifier.
    #[must_use]
    pub const fn id(&self) -> CustomerId {
        self.id
    }

    /// First name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Last name, if recorded.
    #[must_use]
    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    /// Display name; just the first name when no last name is recorded.
    #[must_use]
    pub fn full_name(&self) -> String {
        match &self.last_name {
            Some(last) => format!("{} {}", self.first_name, last),
            None => self.first_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_with_last_name() {
        let customer = Customer::new(CustomerId::new(1), "Jane", Some("Citizen".to_string()));
        assert_eq!(customer.full_name(), "Jane Citizen");
    }

    #[test]
    fn full_name_without_last_name() {
        let customer = Customer::new(CustomerId::new(2), "John", None);
        assert_eq!(customer.full_name(), "John");
    }
}
