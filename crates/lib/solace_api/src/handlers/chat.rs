//! Chat request handler — completion gateway endpoint.

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::error::AppResult;
use crate::handlers::{ValidatedJson, require_field};
use crate::models::{ChatRequest, ChatResponse};

/// `POST /chat` — forward a single message to the completion service.
///
/// Validation happens first: an absent or empty message is a 400 and the
/// gateway is never called.
pub async fn chat_handler(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    let message = require_field(&body.message, "message")?;

    let client = reqwest::Client::new();
    let response =
        solace_core::completion::complete(&client, &state.config.completion, message).await?;

    Ok(Json(ChatResponse { response }))
}
