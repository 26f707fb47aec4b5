//! HTTP response DTOs for the listing API.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::application::dto::ApplicationListItemDto;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service health status.
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMeta {
    /// 1-based page number served.
    pub current_page: u32,
    /// Page size.
    pub per_page: u32,
    /// Total rows matching the filter.
    pub total: u64,
    /// Last page number for the filter.
    pub last_page: u32,
}

impl PageMeta {
    /// Build metadata for a page of `total` rows.
    #[must_use]
    pub fn new(current_page: u32, per_page: u32, total: u64) -> Self {
        let last_page = total
            .div_ceil(u64::from(per_page.max(1)))
            .max(1)
            .try_into()
            .unwrap_or(u32::MAX);

        Self {
            current_page,
            per_page,
            total,
            last_page,
        }
    }
}

/// Paginated application listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationListResponse {
    /// Applications on this page.
    pub data: Vec<ApplicationListItemDto>,
    /// Pagination metadata.
    pub meta: PageMeta,
}

/// Validation failure body (HTTP 422).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    /// Summary message.
    pub message: String,
    /// Per-field error messages.
    pub errors: HashMap<String, Vec<String>>,
}

impl ValidationErrorResponse {
    /// Build a single-field validation failure.
    #[must_use]
    pub fn for_field(field: &str, message: &str) -> Self {
        let mut errors = HashMap::new();
        errors.insert(field.to_string(), vec![message.to_string()]);
        Self {
            message: "The given data was invalid.".to_string(),
            errors,
        }
    }
}
