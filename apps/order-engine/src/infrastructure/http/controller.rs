//! HTTP Controller (Driver Adapter)
//!
//! Axum-based read-only API over the application repository.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;

use crate::application::dto::ApplicationListItemDto;
use crate::domain::order_processing::repository::ApplicationRepository;
use crate::domain::order_processing::value_objects::PlanType;

use super::response::{
    ApplicationListResponse, HealthResponse, PageMeta, ValidationErrorResponse,
};

/// Page size for the application listing.
const PER_PAGE: u32 = 15;

/// Application state shared across handlers.
pub struct AppState<R>
where
    R: ApplicationRepository,
{
    /// Application repository for queries.
    pub application_repo: Arc<R>,
    /// Application version.
    pub version: String,
}

impl<R> Clone for AppState<R>
where
    R: ApplicationRepository,
{
    fn clone(&self) -> Self {
        Self {
            application_repo: Arc::clone(&self.application_repo),
            version: self.version.clone(),
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<R>(state: AppState<R>) -> Router
where
    R: ApplicationRepository + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/api/applications", get(list_applications))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check<R>(State(state): State<AppState<R>>) -> impl IntoResponse
where
    R: ApplicationRepository,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// Query parameters for the application listing.
#[derive(Debug, Deserialize)]
struct ListApplicationsParams {
    plan_type: Option<String>,
    page: Option<u32>,
}

/// List applications, oldest first, optionally filtered by plan type.
async fn list_applications<R>(
    State(state): State<AppState<R>>,
    Query(params): Query<ListApplicationsParams>,
) -> Response
where
    R: ApplicationRepository,
{
    // Closed filter set; anything unrecognized is a validation failure.
    let plan_type = match params.plan_type.as_deref() {
        None | Some("") => None,
        Some(raw) => match raw.parse::<PlanType>() {
            Ok(plan_type) => Some(plan_type),
            Err(_) => {
                return (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ValidationErrorResponse::for_field(
                        "plan_type",
                        "The selected plan type is invalid.",
                    )),
                )
                    .into_response();
            }
        },
    };

    let page = params.page.unwrap_or(1).max(1);

    match state
        .application_repo
        .list_page(plan_type, page, PER_PAGE)
        .await
    {
        Ok(result) => {
            let data: Vec<ApplicationListItemDto> = result
                .applications
                .iter()
                .map(ApplicationListItemDto::from_application)
                .collect();

            Json(ApplicationListResponse {
                data,
                meta: PageMeta::new(page, PER_PAGE, result.total),
            })
            .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Application listing query failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
