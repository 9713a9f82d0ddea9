//! # solace_api
//!
//! HTTP API library for Solace.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

use axum::Router;
use axum::routing::{get, post};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::{account, affirmations, chat, health, journal, wellness};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool.
    pub pool: PgPool,
    /// API configuration.
    pub config: ApiConfig,
}

/// Run embedded database migrations.
///
/// Delegates to `solace_core::migrate::migrate()` which owns the migration files.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    solace_core::migrate::migrate(pool).await
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/affirm", get(affirmations::affirm_handler))
        .route("/chat", post(chat::chat_handler))
        .route("/sign_up", post(account::sign_up_handler))
        .route("/get_user_info", post(account::get_user_info_handler))
        .route("/check_user", post(account::check_user_handler))
        .route("/user_info", post(account::user_info_handler))
        .route("/update_wellness", post(wellness::update_wellness_handler))
        .route(
            "/journal_entries",
            get(journal::list_journal_handler).post(journal::create_journal_handler),
        )
        .layer(cors)
        .with_state(state)
}
