//! Affirmation lookup.

use sqlx::PgPool;

use crate::models::AffirmationRow;

/// Pick one affirmation at random.
///
/// Returns `None` only when the table is empty.
pub async fn random_affirmation(pool: &PgPool) -> Result<Option<AffirmationRow>, sqlx::Error> {
    sqlx::query_as::<_, AffirmationRow>(
        "SELECT id, text, category FROM affirmations ORDER BY random() LIMIT 1",
    )
    .fetch_optional(pool)
    .await
}
