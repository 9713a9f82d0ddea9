//! Wellness snapshot updates.
//!
//! `/update_wellness` accepts an open-ended mapping of field names to new
//! values. Column names never come from request input: every key must match
//! the [`WellnessField`] allow-list and its value must parse to the column's
//! type before any SQL is built.

use serde_json::{Map, Value};
use sqlx::{PgPool, Postgres, QueryBuilder};
use thiserror::Error;

/// Wellness update errors.
#[derive(Debug, Error)]
pub enum WellnessError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Allow-list of updatable wellness columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WellnessField {
    Mood,
    SleepHours,
    WaterGlasses,
    Steps,
    DailyScore,
    Pfp,
}

impl WellnessField {
    /// Map a request key to an allow-listed field.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "mood" => Some(Self::Mood),
            "sleep_hours" => Some(Self::SleepHours),
            "water_glasses" => Some(Self::WaterGlasses),
            "steps" => Some(Self::Steps),
            "daily_score" => Some(Self::DailyScore),
            "pfp" => Some(Self::Pfp),
            _ => None,
        }
    }

    /// Column name in the `users` table.
    pub fn column(self) -> &'static str {
        match self {
            Self::Mood => "mood",
            Self::SleepHours => "sleep_hours",
            Self::WaterGlasses => "water_glasses",
            Self::Steps => "steps",
            Self::DailyScore => "daily_score",
            Self::Pfp => "pfp",
        }
    }
}

/// A request value parsed to its column's type, ready to bind.
#[derive(Debug, Clone, PartialEq)]
enum BoundValue {
    Int(i32),
    Float(f64),
    Text(String),
}

/// Parse a JSON value into the typed setter for a field.
fn parse_value(field: WellnessField, value: &Value) -> Result<BoundValue, WellnessError> {
    let key = field.column();
    match field {
        WellnessField::Mood
        | WellnessField::WaterGlasses
        | WellnessField::Steps
        | WellnessField::DailyScore => {
            let n = value
                .as_i64()
                .and_then(|n| i32::try_from(n).ok())
                .ok_or_else(|| {
                    WellnessError::Validation(format!("'{key}' must be an integer"))
                })?;
            Ok(BoundValue::Int(n))
        }
        WellnessField::SleepHours => {
            let n = value.as_f64().ok_or_else(|| {
                WellnessError::Validation(format!("'{key}' must be a number"))
            })?;
            Ok(BoundValue::Float(n))
        }
        WellnessField::Pfp => {
            let s = value.as_str().ok_or_else(|| {
                WellnessError::Validation(format!("'{key}' must be a string"))
            })?;
            Ok(BoundValue::Text(s.to_string()))
        }
    }
}

/// Validate an updates mapping against the allow-list.
///
/// Returns the parsed (column, value) pairs, or a validation error naming
/// the offending key. Runs to completion before any SQL exists.
fn parse_updates(
    updates: &Map<String, Value>,
) -> Result<Vec<(WellnessField, BoundValue)>, WellnessError> {
    let mut parsed = Vec::with_capacity(updates.len());
    for (key, value) in updates {
        let field = WellnessField::from_key(key).ok_or_else(|| {
            WellnessError::Validation(format!("'{key}' is not an updatable wellness field"))
        })?;
        parsed.push((field, parse_value(field, value)?));
    }
    Ok(parsed)
}

/// Apply a wellness update for the given email.
///
/// Builds a single parameterized UPDATE naming only allow-listed columns,
/// with every value bound. Returns the number of rows affected; zero
/// matched rows is not an error.
pub async fn update_wellness(
    pool: &PgPool,
    email: &str,
    updates: &Map<String, Value>,
) -> Result<u64, WellnessError> {
    let parsed = parse_updates(updates)?;
    if parsed.is_empty() {
        return Err(WellnessError::Validation("No updates provided".into()));
    }

    let mut qb = QueryBuilder::<Postgres>::new("UPDATE users SET ");
    let mut sep = qb.separated(", ");
    for (field, value) in parsed {
        sep.push(field.column());
        sep.push_unseparated(" = ");
        match value {
            BoundValue::Int(n) => sep.push_bind_unseparated(n),
            BoundValue::Float(n) => sep.push_bind_unseparated(n),
            BoundValue::Text(s) => sep.push_bind_unseparated(s),
        };
    }
    qb.push(" WHERE email = ");
    qb.push_bind(email);

    let result = qb.build().execute(pool).await?;
    Ok(result.rows_affected())
}
