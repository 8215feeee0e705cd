//! # REST API for Itinerary Items
//!
//! Endpoints for item CRUD within travel days, drag-reorder and the
//! advisory day summary. Deletion is addressed by item id alone and scans
//! all trips, matching the idempotent-delete contract.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{delete, get, post, put},
    Router,
};
use serde::Serialize;
use tracing::{error, info};

use shared::{AddItineraryItemRequest, ReorderItemsRequest, UpdateItineraryItemRequest};

use super::domain_error_response;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ReorderResponse {
    reordered: bool,
    message: String,
}

#[derive(Debug, Serialize)]
pub struct RemoveItemResponse {
    removed: bool,
    message: String,
}

/// Create a router for day-scoped item APIs
pub fn days_router() -> Router<AppState> {
    Router::new()
        .route("/:day_id/items", post(add_item))
        .route("/:day_id/items/:item_id", put(update_item))
        .route("/:day_id/reorder", post(reorder_items))
        .route("/:day_id/summary", get(day_summary))
}

/// Create a router for item-scoped APIs
pub fn items_router() -> Router<AppState> {
    Router::new().route("/:item_id", delete(remove_item))
}

/// Append a new item to a day
pub async fn add_item(
    State(state): State<AppState>,
    Path(day_id): Path<String>,
    Json(request): Json<AddItineraryItemRequest>,
) -> impl IntoResponse {
    info!("POST /api/days/{}/items - request: {:?}", day_id, request);

    match state.itinerary_service.add_item(&day_id, request).await {
        Ok(response) => (StatusCode::CREATED, Json(response)).into_response(),
        Err(e) => {
            error!("Failed to add item to day {}: {}", day_id, e);
            domain_error_response(e)
        }
    }
}

/// Patch an item in place, or move it to another day
pub async fn update_item(
    State(state): State<AppState>,
    Path((day_id, item_id)): Path<(String, String)>,
    Json(request): Json<UpdateItineraryItemRequest>,
) -> impl IntoResponse {
    info!("PUT /api/days/{}/items/{} - request: {:?}", day_id, item_id, request);

    match state.itinerary_service.update_item(&day_id, &item_id, request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            error!("Failed to update item {}: {}", item_id, e);
            domain_error_response(e)
        }
    }
}

/// Remove an item wherever it lives. Absence is success.
pub async fn remove_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/items/{}", item_id);

    match state.itinerary_service.remove_item(&item_id).await {
        Ok(removed) => (
            StatusCode::OK,
            Json(RemoveItemResponse {
                removed,
                message: "Elemento rimosso dall'itinerario".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to remove item {}: {}", item_id, e);
            domain_error_response(e)
        }
    }
}

/// Apply a drag gesture to a day's items
pub async fn reorder_items(
    State(state): State<AppState>,
    Path(day_id): Path<String>,
    Json(request): Json<ReorderItemsRequest>,
) -> impl IntoResponse {
    info!("POST /api/days/{}/reorder - request: {:?}", day_id, request);

    match state.itinerary_service.reorder_by_gesture(&day_id, request).await {
        Ok(reordered) => {
            let message = if reordered {
                "Itinerario riordinato!".to_string()
            } else {
                "Nessuna modifica all'ordine".to_string()
            };
            (StatusCode::OK, Json(ReorderResponse { reordered, message })).into_response()
        }
        Err(e) => {
            error!("Failed to reorder day {}: {}", day_id, e);
            domain_error_response(e)
        }
    }
}

/// Advisory totals for one day
pub async fn day_summary(
    State(state): State<AppState>,
    Path(day_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/days/{}/summary", day_id);

    match state.itinerary_service.day_summary(&day_id).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            error!("Failed to summarize day {}: {}", day_id, e);
            domain_error_response(e)
        }
    }
}
