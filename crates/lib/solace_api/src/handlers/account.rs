//! Account request handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::handlers::{ValidatedJson, require_field};
use crate::models::{CredentialsRequest, MessageResponse, SignUpRequest, UserInfoRequest};
use crate::services::account;
use solace_core::models::{AccountRecord, Profile, ProfileWellness};

/// `POST /sign_up` — create a new account.
pub async fn sign_up_handler(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<SignUpRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let name = require_field(&body.name, "name")?;
    let email = require_field(&body.email, "email")?;
    let password = require_field(&body.password, "password")?;

    account::sign_up(&state.pool, name, email, password).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User added successfully".into(),
        }),
    ))
}

/// `POST /get_user_info` — authenticate and return the full account record
/// including the wellness snapshot.
pub async fn get_user_info_handler(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CredentialsRequest>,
) -> AppResult<Json<AccountRecord>> {
    let email = require_field(&body.email, "email")?;
    let password = require_field(&body.password, "password")?;

    let record = account::login(&state.pool, email, password).await?;
    Ok(Json(record))
}

/// `POST /check_user` — verify credentials and return the profile subset.
pub async fn check_user_handler(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CredentialsRequest>,
) -> AppResult<Json<Profile>> {
    let email = require_field(&body.email, "email")?;
    let password = require_field(&body.password, "password")?;

    let profile = account::check_user(&state.pool, email, password).await?;
    Ok(Json(profile))
}

/// `POST /user_info` — profile plus wellness metrics, no credential check.
pub async fn user_info_handler(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<UserInfoRequest>,
) -> AppResult<Json<ProfileWellness>> {
    let email = require_field(&body.email, "email")?;

    let row = solace_core::auth::queries::find_profile_wellness_by_email(&state.pool, email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;
    Ok(Json(row))
}
