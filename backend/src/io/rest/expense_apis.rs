//! # REST API for Travel Expenses

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tracing::{error, info};

use shared::CreateExpenseRequest;

use super::domain_error_response;
use crate::AppState;

/// Create a router for expense APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_expenses).post(create_expense))
        .route("/summary", get(expense_summary))
}

/// List all recorded expenses, newest first
pub async fn list_expenses(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/expenses");
    let response = state.expense_service.list_expenses().await;
    (StatusCode::OK, Json(response)).into_response()
}

/// Record a new expense
pub async fn create_expense(
    State(state): State<AppState>,
    Json(request): Json<CreateExpenseRequest>,
) -> impl IntoResponse {
    info!("POST /api/expenses - request: {:?}", request);

    match state.expense_service.create_expense(request).await {
        Ok(response) => (StatusCode::CREATED, Json(response)).into_response(),
        Err(e) => {
            error!("Failed to record expense: {}", e);
            domain_error_response(e)
        }
    }
}

/// Total spending measured against the configured budget
pub async fn expense_summary(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/expenses/summary");
    let response = state.expense_service.summary().await;
    (StatusCode::OK, Json(response)).into_response()
}
