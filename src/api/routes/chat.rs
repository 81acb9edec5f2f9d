//! Chat Routes
//!
//! - POST /api/v1/chat - Reply to a chat message
//! - GET /api/v1/suggestions - Canned topic prompts

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{ChatRequest, ChatResponse, SuggestionsResponse};
use crate::api::error::ApiResult;
use crate::api::extract::ApiJson;
use crate::api::state::AppState;
use crate::assistant::TOPIC_SUGGESTIONS;

/// POST /api/v1/chat
///
/// Chart and analysis requests get a mock coin card; everything else is
/// answered by the completion API. Upstream trouble still yields a 200
/// with an apology text.
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<ChatRequest>,
) -> ApiResult<Json<ChatResponse>> {
    let message = state.chat.reply(&req.message, &req.history).await?;
    Ok(Json(ChatResponse { message }))
}

/// GET /api/v1/suggestions
pub async fn suggestions() -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse {
        suggestions: TOPIC_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
    })
}
