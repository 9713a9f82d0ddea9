//! Journal request handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde_json::Value;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::handlers::{ValidatedJson, require_field};
use crate::models::{
    CreateJournalRequest, JournalCreatedResponse, JournalEntriesResponse, JournalEntry,
    JournalListQuery,
};

/// `GET /journal_entries?email=` — list entries for an email, newest first.
pub async fn list_journal_handler(
    State(state): State<AppState>,
    Query(query): Query<JournalListQuery>,
) -> AppResult<Json<JournalEntriesResponse>> {
    let email = require_field(&query.email, "email")?;

    let rows = solace_core::journal::list_entries(&state.pool, email).await?;
    let entries = rows.into_iter().map(JournalEntry::from).collect();

    Ok(Json(JournalEntriesResponse { entries }))
}

/// `POST /journal_entries` — create an entry.
///
/// All four fields are required; a score of 0 is a valid value.
pub async fn create_journal_handler(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateJournalRequest>,
) -> AppResult<(StatusCode, Json<JournalCreatedResponse>)> {
    let email = require_field(&body.email, "email")?;
    let content = require_field(&body.content, "content")?;
    let activities = body
        .activities
        .as_ref()
        .ok_or_else(|| AppError::Validation("activities is required".into()))?;
    let score = body
        .score
        .ok_or_else(|| AppError::Validation("score is required".into()))?;

    // Lists are stored serialized; a bare string is stored as-is.
    let activities_text = match activities {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    let row =
        solace_core::journal::create_entry(&state.pool, email, content, &activities_text, score)
            .await?;

    Ok((
        StatusCode::CREATED,
        Json(JournalCreatedResponse {
            message: "Journal entry created successfully".into(),
            id: row.id,
        }),
    ))
}
