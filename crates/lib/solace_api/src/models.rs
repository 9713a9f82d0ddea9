//! API request and response bodies.
//!
//! Request fields are `Option` so handlers can report missing input as a
//! 400 instead of a deserialization failure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use solace_core::models::JournalEntryRow;
use uuid::Uuid;

/// Timestamp format used in journal responses.
const JOURNAL_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Standard error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// `POST /chat` request.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
}

/// `POST /chat` response.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// `POST /get_user_info` and `POST /check_user` request.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// `POST /sign_up` request.
#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// `POST /user_info` request.
#[derive(Debug, Deserialize)]
pub struct UserInfoRequest {
    pub email: Option<String>,
}

/// `POST /update_wellness` request.
#[derive(Debug, Deserialize)]
pub struct UpdateWellnessRequest {
    pub email: Option<String>,
    pub updates: Option<serde_json::Map<String, Value>>,
}

/// `POST /update_wellness` response.
#[derive(Debug, Serialize)]
pub struct UpdateWellnessResponse {
    pub success: bool,
    pub message: String,
}

/// Simple message response (sign-up).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `GET /affirm` response.
#[derive(Debug, Serialize)]
pub struct AffirmationsResponse {
    pub affirmations: Vec<solace_core::models::AffirmationRow>,
}

/// `GET /journal_entries` query string.
#[derive(Debug, Deserialize)]
pub struct JournalListQuery {
    pub email: Option<String>,
}

/// `POST /journal_entries` request.
///
/// `activities` accepts any JSON value; lists are the expected shape and
/// are stored serialized as text.
#[derive(Debug, Deserialize)]
pub struct CreateJournalRequest {
    pub email: Option<String>,
    pub content: Option<String>,
    pub activities: Option<Value>,
    pub score: Option<i32>,
}

/// `POST /journal_entries` response.
#[derive(Debug, Serialize)]
pub struct JournalCreatedResponse {
    pub message: String,
    pub id: Uuid,
}

/// `GET /journal_entries` response.
#[derive(Debug, Serialize)]
pub struct JournalEntriesResponse {
    pub entries: Vec<JournalEntry>,
}

/// A journal entry as presented to clients.
#[derive(Debug, Serialize)]
pub struct JournalEntry {
    pub id: Uuid,
    pub date: String,
    pub content: String,
    pub activities: Value,
    pub score: i32,
}

impl From<JournalEntryRow> for JournalEntry {
    fn from(row: JournalEntryRow) -> Self {
        Self {
            id: row.id,
            date: format_journal_date(&row.created_at),
            content: row.content,
            // Stored as serialized text; hand back the parsed list. Rows
            // that predate JSON storage fall back to the raw string.
            activities: serde_json::from_str(&row.activities)
                .unwrap_or(Value::String(row.activities)),
            score: row.score,
        }
    }
}

/// Render a journal timestamp as `YYYY-MM-DD HH:MM:SS`.
pub fn format_journal_date(at: &DateTime<Utc>) -> String {
    at.format(JOURNAL_DATE_FORMAT).to_string()
}

/// `GET /health` response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub db_connected: bool,
}
