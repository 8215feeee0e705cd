//! # REST API for Import and Export
//!
//! Endpoints converting between the native trip representation and external
//! file formats. Import is all-or-nothing; export serves the exact
//! persisted shape plus a derived download file name.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use tracing::{error, info};

use shared::ImportTripRequest;

use super::domain_error_response;
use crate::AppState;

/// Create a router for import/export APIs, merged into the trips router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/import", post(import_trip))
        .route("/:trip_id/export", get(export_trip))
}

/// Import an itinerary from external file content
pub async fn import_trip(
    State(state): State<AppState>,
    Json(request): Json<ImportTripRequest>,
) -> impl IntoResponse {
    info!(
        "POST /api/trips/import - {} bytes, hint: {:?}",
        request.content.len(),
        request.format_hint
    );

    match state.import_service.import_trip(request).await {
        Ok(response) => (StatusCode::CREATED, Json(response)).into_response(),
        Err(e) => {
            error!("Failed to import itinerary: {}", e);
            domain_error_response(e)
        }
    }
}

/// Export a trip as a downloadable JSON document
pub async fn export_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/trips/{}/export", trip_id);

    match state.export_service.export_trip(&trip_id).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            error!("Failed to export trip {}: {}", trip_id, e);
            domain_error_response(e)
        }
    }
}
