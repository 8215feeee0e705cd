//! # REST API for the Travel Assistant
//!
//! Single endpoint proxying a chat message to the external model. Always
//! answers 200 with displayable text; upstream failures surface as
//! `success: false` with fallback text, never as an HTTP error.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::post,
    Router,
};
use tracing::info;

use shared::AssistantChatRequest;

use crate::AppState;

/// Create a router for assistant APIs
pub fn router() -> Router<AppState> {
    Router::new().route("/chat", post(chat))
}

/// Forward one chat message to the assistant
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<AssistantChatRequest>,
) -> impl IntoResponse {
    info!(
        "POST /api/assistant/chat - message: {} chars, conversation: {} turns",
        request.message.len(),
        request.conversation.len()
    );

    let response = state.assistant_service.chat(request).await;
    (StatusCode::OK, Json(response)).into_response()
}
