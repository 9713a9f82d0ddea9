//! Flat row records shared between queries and API responses.
//!
//! Field names are the canonical column names, so serialized JSON
//! mirrors the store directly.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Full account row: profile plus wellness snapshot.
///
/// Returned by the login flow (`POST /get_user_info`).
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct AccountRecord {
    pub daily_score: Option<i32>,
    pub sleep_hours: Option<f64>,
    pub water_glasses: Option<i32>,
    pub steps: Option<i32>,
    pub mood: Option<i32>,
    pub pfp: Option<String>,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub relation: Option<String>,
    pub emergency_contact_phone: Option<String>,
}

/// Profile subset returned by `POST /check_user`.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub relation: Option<String>,
    pub emergency_contact_phone: Option<String>,
}

/// Profile plus wellness metrics returned by `POST /user_info`.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ProfileWellness {
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub relation: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub mood: Option<i32>,
    pub sleep_hours: Option<f64>,
    pub water_glasses: Option<i32>,
    pub steps: Option<i32>,
}

/// Row returned by journal queries.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct JournalEntryRow {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub content: String,
    /// JSON array serialized as text.
    pub activities: String,
    pub score: i32,
}

/// Static affirmation reference row.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct AffirmationRow {
    pub id: i64,
    pub text: String,
    pub category: String,
}
