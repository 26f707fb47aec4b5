//! HTTP client wrapper for the B2B endpoint.
//!
//! One request per call, bounded by the configured timeout. There is no
//! retry here: a failed placement is resolved by the worker, and retries
//! happen only through external re-selection.

use reqwest::Client;

use super::api_types::{B2bOrderRequest, B2bOrderResponse};
use super::config::B2bConfig;
use super::error::B2bError;

/// HTTP client for the B2B ordering API.
#[derive(Debug, Clone)]
pub struct B2bHttpClient {
    client: Client,
    endpoint_url: String,
}

impl B2bHttpClient {
    /// Create a new HTTP client from config.
    ///
    /// # Errors
    ///
    /// Returns error if the endpoint URL is empty or the client cannot be
    /// constructed.
    pub fn new(config: &B2bConfig) -> Result<Self, B2bError> {
        if config.endpoint_url.is_empty() {
            return Err(B2bError::InvalidEndpoint(
                "endpoint URL is empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| B2bError::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint_url: config.endpoint_url.clone(),
        })
    }

    /// POST one order request to the endpoint.
    ///
    /// # Errors
    ///
    /// Returns error on connection failure, timeout, non-2xx status, or an
    /// unparseable body.
    pub async fn post_order(
        &self,
        request: &B2bOrderRequest,
    ) -> Result<B2bOrderResponse, B2bError> {
        let response = self
            .client
            .post(&self.endpoint_url)
            .json(request)
            .send()
            .await
            .map_err(|e| B2bError::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(B2bError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| B2bError::Network(e.to_string()))?;

        serde_json::from_str(&text).map_err(|e| B2bError::JsonParse(e.to_string()))
    }
}
