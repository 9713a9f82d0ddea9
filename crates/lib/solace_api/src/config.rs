//! API server configuration.

use solace_core::completion::CompletionConfig;

/// Configuration for the API server.
///
/// Built once at startup and passed to every handler through
/// [`crate::AppState`]; handlers never read the environment themselves.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:5000").
    pub bind_addr: String,
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// Remote completion service and search index settings.
    pub completion: CompletionConfig,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable       | Default                           |
    /// |----------------|-----------------------------------|
    /// | `BIND_ADDR`    | `127.0.0.1:5000`                  |
    /// | `DATABASE_URL` | `postgres://localhost:5432/solace` |
    ///
    /// Completion and search credentials (`AZURE_OPENAI_*`,
    /// `AZURE_SEARCH_*`, `SEARCH_INDEX_NAME`) have no defaults; missing
    /// values fail at chat time, not at startup.
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:5000".into()),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost:5432/solace".into()),
            completion: CompletionConfig::from_env(),
        }
    }
}
