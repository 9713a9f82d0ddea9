//! Wellness update handler.

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::handlers::{ValidatedJson, require_field};
use crate::models::{UpdateWellnessRequest, UpdateWellnessResponse};

/// `POST /update_wellness` — apply allow-listed wellness field updates.
///
/// Zero matched rows still reports success; this endpoint has no 404.
pub async fn update_wellness_handler(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<UpdateWellnessRequest>,
) -> AppResult<Json<UpdateWellnessResponse>> {
    let email = require_field(&body.email, "email")?;
    let updates = body
        .updates
        .as_ref()
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AppError::Validation("updates are required".into()))?;

    solace_core::wellness::update_wellness(&state.pool, email, updates).await?;

    Ok(Json(UpdateWellnessResponse {
        success: true,
        message: "Wellness data updated successfully".into(),
    }))
}
