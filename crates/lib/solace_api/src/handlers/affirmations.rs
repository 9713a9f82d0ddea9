//! Affirmation handler.

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::error::AppResult;
use crate::models::AffirmationsResponse;

/// `GET /affirm` — one random affirmation, wrapped in a list.
///
/// The list is empty only when the reference table has no rows.
pub async fn affirm_handler(
    State(state): State<AppState>,
) -> AppResult<Json<AffirmationsResponse>> {
    let affirmations = solace_core::affirmations::random_affirmation(&state.pool)
        .await?
        .into_iter()
        .collect();

    Ok(Json(AffirmationsResponse { affirmations }))
}
