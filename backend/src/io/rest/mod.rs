//! # REST API Interface Layer
//!
//! HTTP endpoints for the itinerary planner. This layer handles request and
//! response serialization, translation of domain errors to HTTP status
//! codes, and request logging. It contains no business logic: every handler
//! is a thin translation onto a domain service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Router;

use crate::domain::DomainError;
use crate::AppState;

pub mod assistant_apis;
pub mod expense_apis;
pub mod import_export_apis;
pub mod itinerary_apis;
pub mod trip_apis;

/// Assemble the full API router, nested under `/api` by the caller
pub fn api_router() -> Router<AppState> {
    Router::new()
        .nest("/trips", trip_apis::router().merge(import_export_apis::router()))
        .nest("/days", itinerary_apis::days_router())
        .nest("/items", itinerary_apis::items_router())
        .nest("/assistant", assistant_apis::router())
        .nest("/expenses", expense_apis::router())
}

/// Translate a domain error to an HTTP response. Every user-initiated
/// mutation that fails produces a plain-language message; nothing fails
/// silently.
pub(crate) fn domain_error_response(error: DomainError) -> Response {
    let status = match &error {
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::ImportFormat => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::SaveFailed(_) | DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, error.to_string()).into_response()
}
