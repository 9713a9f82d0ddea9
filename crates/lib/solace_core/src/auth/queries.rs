//! Account database queries.

use sqlx::PgPool;

use super::AuthError;
use crate::models::{AccountRecord, Profile, ProfileWellness};

/// Check whether an email is already registered.
pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool, AuthError> {
    let exists =
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(pool)
            .await?;
    Ok(exists)
}

/// Create a new user, returning the user ID.
pub async fn create_user(
    pool: &PgPool,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<String, AuthError> {
    let user_id = sqlx::query_scalar::<_, String>(
        "INSERT INTO users (name, email, password_hash) VALUES ($1, $2, $3) RETURNING id::text",
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await?;
    Ok(user_id)
}

/// Fetch the stored password hash for an email, if the account exists.
pub async fn find_password_hash(
    pool: &PgPool,
    email: &str,
) -> Result<Option<String>, AuthError> {
    let hash =
        sqlx::query_scalar::<_, String>("SELECT password_hash FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await?;
    Ok(hash)
}

/// Fetch the full account record (profile + wellness snapshot) by email.
pub async fn find_account_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<AccountRecord>, AuthError> {
    let row = sqlx::query_as::<_, AccountRecord>(
        r#"
        SELECT daily_score, sleep_hours, water_glasses, steps, mood, pfp,
               name, email, phone_number, emergency_contact_name, relation,
               emergency_contact_phone
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Fetch the profile subset by email.
pub async fn find_profile_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<Profile>, AuthError> {
    let row = sqlx::query_as::<_, Profile>(
        r#"
        SELECT name, email, phone_number, emergency_contact_name, relation,
               emergency_contact_phone
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Fetch profile plus wellness metrics by email.
pub async fn find_profile_wellness_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<ProfileWellness>, AuthError> {
    let row = sqlx::query_as::<_, ProfileWellness>(
        r#"
        SELECT name, email, phone_number, emergency_contact_name, relation,
               emergency_contact_phone, mood, sleep_hours, water_glasses, steps
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}
