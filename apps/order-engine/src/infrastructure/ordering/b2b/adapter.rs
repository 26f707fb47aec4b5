//! B2B ordering adapter implementing OrderingPort.

use async_trait::async_trait;

use crate::application::ports::{OrderPlacement, OrderingError, OrderingPort, PlaceOrderRequest};
use crate::domain::shared::OrderId;

use super::api_types::B2bOrderRequest;
use super::config::B2bConfig;
use super::error::B2bError;
use super::http_client::B2bHttpClient;

/// NBN wholesale B2B ordering adapter.
///
/// Implements `OrderingPort` for the wholesale ordering endpoint.
#[derive(Debug, Clone)]
pub struct B2bOrderingAdapter {
    client: B2bHttpClient,
}

impl B2bOrderingAdapter {
    /// Create a new B2B ordering adapter.
    ///
    /// # Errors
    ///
    /// Returns error if the endpoint configuration is unusable.
    pub fn new(config: &B2bConfig) -> Result<Self, B2bError> {
        let client = B2bHttpClient::new(config)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl OrderingPort for B2bOrderingAdapter {
    async fn place_order(
        &self,
        request: PlaceOrderRequest,
    ) -> Result<OrderPlacement, OrderingError> {
        let wire_request = B2bOrderRequest::from(request);

        tracing::debug!(
            plan_name = %wire_request.plan_name,
            postcode = %wire_request.postcode,
            "Posting order to B2B endpoint"
        );

        let response = self
            .client
            .post_order(&wire_request)
            .await
            .map_err(OrderingError::from)?;

        if !response.is_successful() {
            return Err(OrderingError::Rejected {
                status: response.status,
            });
        }

        let order_id = response.id.ok_or_else(|| OrderingError::MalformedResponse {
            message: "successful response missing order id".to_string(),
        })?;

        tracing::debug!(order_id = %order_id, "B2B endpoint accepted order");

        Ok(OrderPlacement {
            order_id: OrderId::new(order_id),
        })
    }
}
