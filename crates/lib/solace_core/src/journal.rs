//! Journal entry persistence.
//!
//! Entries are immutable after creation and listed newest-first.

use sqlx::PgPool;

use crate::models::JournalEntryRow;
use crate::uuid::uuidv7;

/// Create a new journal entry, returning the stored row.
pub async fn create_entry(
    pool: &PgPool,
    email: &str,
    content: &str,
    activities: &str,
    score: i32,
) -> Result<JournalEntryRow, sqlx::Error> {
    sqlx::query_as::<_, JournalEntryRow>(
        r#"
        INSERT INTO journal_entries (id, email, content, activities, score)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, email, created_at, content, activities, score
        "#,
    )
    .bind(uuidv7())
    .bind(email)
    .bind(content)
    .bind(activities)
    .bind(score)
    .fetch_one(pool)
    .await
}

/// List journal entries for an email, newest first.
pub async fn list_entries(
    pool: &PgPool,
    email: &str,
) -> Result<Vec<JournalEntryRow>, sqlx::Error> {
    sqlx::query_as::<_, JournalEntryRow>(
        r#"
        SELECT id, email, created_at, content, activities, score
        FROM journal_entries
        WHERE email = $1
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(email)
    .fetch_all(pool)
    .await
}
