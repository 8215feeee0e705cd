//! # REST API for Trips
//!
//! Endpoints for trip CRUD and the current-trip selection.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, patch, post},
    Router,
};
use tracing::{error, info};

use shared::{AddItemForDateRequest, CreateTripRequest, SetCurrentTripRequest, UpdateTripRequest};

use super::domain_error_response;
use crate::AppState;

/// Create a router for trip related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_trips).post(create_trip))
        .route("/current", get(get_current_trip).put(set_current_trip))
        .route("/:trip_id", patch(update_trip))
        .route("/:trip_id/items", post(add_item_for_date))
}

/// List all known trips in creation order
pub async fn list_trips(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/trips");
    let response = state.trip_service.list_trips().await;
    (StatusCode::OK, Json(response)).into_response()
}

/// Create a new trip with one initial day
pub async fn create_trip(
    State(state): State<AppState>,
    Json(request): Json<CreateTripRequest>,
) -> impl IntoResponse {
    info!("POST /api/trips - request: {:?}", request);

    match state.trip_service.create_trip(request).await {
        Ok(response) => (StatusCode::CREATED, Json(response)).into_response(),
        Err(e) => {
            error!("Failed to create trip: {}", e);
            domain_error_response(e)
        }
    }
}

/// Patch an existing trip
pub async fn update_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
    Json(request): Json<UpdateTripRequest>,
) -> impl IntoResponse {
    info!("PATCH /api/trips/{} - request: {:?}", trip_id, request);

    match state.trip_service.update_trip(&trip_id, request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            error!("Failed to update trip {}: {}", trip_id, e);
            domain_error_response(e)
        }
    }
}

/// Get the currently selected trip, if any
pub async fn get_current_trip(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/trips/current");
    let response = state.trip_service.current_trip().await;
    (StatusCode::OK, Json(response)).into_response()
}

/// Select the current trip
pub async fn set_current_trip(
    State(state): State<AppState>,
    Json(request): Json<SetCurrentTripRequest>,
) -> impl IntoResponse {
    info!("PUT /api/trips/current - request: {:?}", request);

    match state.trip_service.set_current_trip(request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            error!("Failed to set current trip: {}", e);
            domain_error_response(e)
        }
    }
}

/// Add an item to the trip's day with the given date, creating the day when
/// none exists for that date
pub async fn add_item_for_date(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
    Json(request): Json<AddItemForDateRequest>,
) -> impl IntoResponse {
    info!("POST /api/trips/{}/items - date: {}", trip_id, request.date);

    match state.itinerary_service.add_item_for_date(&trip_id, request).await {
        Ok(response) => (StatusCode::CREATED, Json(response)).into_response(),
        Err(e) => {
            error!("Failed to add item to trip {}: {}", trip_id, e);
            domain_error_response(e)
        }
    }
}
