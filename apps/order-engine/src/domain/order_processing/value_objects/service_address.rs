//! Service address for an application.

use serde::{Deserialize, Serialize};

/// The address the service is to be connected at.
///
/// `address_2` is optional (unit/suite lines); all other fields are
/// required by the B2B ordering contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceAddress {
    address_1: String,
    address_2: Option<String>,
    city: String,
    state: String,
    postcode: String,
}

impl ServiceAddress {
    /// Create a service address.
    #[must_use]
    pub fn new(
        address_1: impl Into<String>,
        address_2: Option<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        postcode: impl Into<String>,
    ) -> Self {
        Self {
            address_1: address_1.into(),
            address_2,
            city: city.into(),
            state: state.into(),
            postcode: postcode.into(),
        }
    }

    /// First address line.
    #[must_use]
    pub fn address_1(&self) -> &str {
        &self.address_1
    }

    /// Second address line, if any.
    #[must_use]
    pub fn address_2(&self) -> Option<&str> {
        self.address_2.as_deref()
    }

    /// City or suburb.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// State or territory.
    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Postcode.
    #[must_use]
    pub fn postcode(&self) -> &str {
        &self.postcode
    }

    /// Single-line display form; the second line is appended only when present.
    #[must_use]
    pub fn single_line(&self) -> String {
        match &self.address_2 {
            Some(line_2) => format!("{}, {}", self.address_1, line_2),
            None => self.address_1.clone(),
        }
    }
}
