//! B2B ordering API request and response types.
//!
//! These types map directly to the NBN wholesale endpoint's JSON format.

use serde::{Deserialize, Serialize};

use crate::application::ports::PlaceOrderRequest;

/// Status token the endpoint uses to report a placed order.
pub const SUCCESS_STATUS: &str = "Successful";

/// Order request for the B2B endpoint.
///
/// The `plan name` key contains a literal space; the wire format predates
/// this system and must be preserved exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct B2bOrderRequest {
    /// First address line.
    pub address_1: String,
    /// Second address line; serialized as null when absent.
    pub address_2: Option<String>,
    /// City or suburb.
    pub city: String,
    /// State or territory.
    pub state: String,
    /// Postcode.
    pub postcode: String,
    /// Plan display name.
    #[serde(rename = "plan name")]
    pub plan_name: String,
}

impl From<PlaceOrderRequest> for B2bOrderRequest {
    fn from(request: PlaceOrderRequest) -> Self {
        Self {
            address_1: request.address_1,
            address_2: request.address_2,
            city: request.city,
            state: request.state,
            postcode: request.postcode,
            plan_name: request.plan_name,
        }
    }
}

/// Order response from the B2B endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct B2bOrderResponse {
    /// Outcome status token.
    pub status: String,
    /// Order identifier; present on success.
    #[serde(default)]
    pub id: Option<String>,
}

impl B2bOrderResponse {
    /// Returns true if the endpoint reported the order as placed.
    #[must_use]
    pub fn is_successful(&self) -> bool {
        self.status == SUCCESS_STATUS
    }
}
