//! Account service — sign-up and credential-check flows delegating to
//! `solace_core::auth`.

use sqlx::PgPool;
use tracing::info;

use crate::error::{AppError, AppResult};
use solace_core::auth::{password, queries};
use solace_core::models::{AccountRecord, Profile};

/// Create a new account.
///
/// Checks for a duplicate email first; the insert never runs when one
/// exists.
pub async fn sign_up(pool: &PgPool, name: &str, email: &str, password: &str) -> AppResult<()> {
    if queries::email_exists(pool, email).await? {
        return Err(AppError::Conflict("Email already exists".into()));
    }

    let pw_hash = password::hash_password(password)?;
    let user_id = queries::create_user(pool, name, email, &pw_hash).await?;
    info!(email, user_id = %user_id, "account created");
    Ok(())
}

/// Authenticate and return the full account record.
///
/// Unknown email and wrong password both report the same generic 401.
pub async fn login(pool: &PgPool, email: &str, password: &str) -> AppResult<AccountRecord> {
    let pw_hash = queries::find_password_hash(pool, email)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid email or password".into()))?;

    if !password::verify_password(password, &pw_hash)? {
        return Err(AppError::Unauthorized("Invalid email or password".into()));
    }

    queries::find_account_by_email(pool, email)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid email or password".into()))
}

/// Verify credentials and return the profile subset.
///
/// Distinguishes unknown email (404) from a wrong password (401).
pub async fn check_user(pool: &PgPool, email: &str, password: &str) -> AppResult<Profile> {
    let pw_hash = queries::find_password_hash(pool, email)
        .await?
        .ok_or_else(|| AppError::NotFound("Email not found".into()))?;

    if !password::verify_password(password, &pw_hash)? {
        return Err(AppError::Unauthorized("Incorrect password".into()));
    }

    queries::find_profile_by_email(pool, email)
        .await?
        .ok_or_else(|| AppError::NotFound("Email not found".into()))
}
