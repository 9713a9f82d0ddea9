//! Request handlers.

pub mod account;
pub mod affirmations;
pub mod chat;
pub mod health;
pub mod journal;
pub mod wellness;

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor whose rejections are validation errors.
///
/// A malformed body or a present-but-mistyped field reports the same 400
/// `{"error","message"}` shape as a missing field, instead of axum's
/// default 422.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;
        Ok(Self(value))
    }
}

/// Extract a required string field, rejecting absent and empty values.
///
/// Runs before any database or upstream access.
pub(crate) fn require_field<'a>(
    value: &'a Option<String>,
    name: &str,
) -> Result<&'a str, AppError> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!("{name} is required"))),
    }
}
