//! Completion gateway — Azure OpenAI chat completions with retrieval
//! augmentation.
//!
//! Each call is stateless: a fixed system persona prompt plus the user's
//! message, grounded against a managed search index via an `azure_search`
//! data source. No history is kept across calls and no retry is attempted;
//! any upstream fault surfaces as a single [`CompletionError`].

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// System persona framing every conversation.
const SYSTEM_PROMPT: &str = "You are a compassionate assistant providing guidance \
and support for someone struggling with feelings of worthlessness and mental \
health challenges.";

/// Returned when the upstream answers with no choices.
pub const NO_RESPONSE_PLACEHOLDER: &str = "No response received.";

/// Default Azure OpenAI API version.
const DEFAULT_API_VERSION: &str = "2024-06-01";

/// Errors from the completion gateway.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Provider error: {0}")]
    Provider(String),
}

/// Managed search index settings for retrieval augmentation.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Search service endpoint URL.
    pub endpoint: Option<String>,
    /// Search service admin key.
    pub api_key: Option<String>,
    /// Name of the index to ground answers against.
    pub index_name: Option<String>,
}

/// Settings for the remote completion service.
///
/// Credentials are `Option` and resolved from the environment at startup;
/// missing values fail at call time with [`CompletionError::Config`] rather
/// than preventing the server from booting.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// Azure OpenAI resource endpoint URL.
    pub endpoint: Option<String>,
    /// Azure OpenAI API key.
    pub api_key: Option<String>,
    /// Chat completions deployment name.
    pub deployment: Option<String>,
    /// API version query parameter.
    pub api_version: String,
    /// Embedding model name; part of the deployment's required external
    /// configuration, not used by any call in this crate.
    pub embedding_model: Option<String>,
    /// Retrieval-augmentation search index settings.
    pub search: SearchConfig,
}

impl CompletionConfig {
    /// Read completion and search settings from environment variables.
    pub fn from_env() -> Self {
        Self {
            endpoint: std::env::var("AZURE_OPENAI_ENDPOINT").ok(),
            api_key: std::env::var("AZURE_OPENAI_API_KEY").ok(),
            deployment: std::env::var("AZURE_OPENAI_CHAT_COMPLETIONS_DEPLOYMENT_NAME").ok(),
            api_version: std::env::var("AZURE_OPENAI_API_VERSION")
                .unwrap_or_else(|_| DEFAULT_API_VERSION.into()),
            embedding_model: std::env::var("AZURE_OPENAI_EMBEDDING_MODEL").ok(),
            search: SearchConfig {
                endpoint: std::env::var("AZURE_SEARCH_SERVICE_ENDPOINT").ok(),
                api_key: std::env::var("AZURE_SEARCH_SERVICE_ADMIN_KEY").ok(),
                index_name: std::env::var("SEARCH_INDEX_NAME").ok(),
            },
        }
    }
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct SearchAuthentication<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    key: &'a str,
}

#[derive(Serialize)]
struct SearchParameters<'a> {
    endpoint: &'a str,
    index_name: &'a str,
    authentication: SearchAuthentication<'a>,
}

#[derive(Serialize)]
struct DataSource<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    parameters: SearchParameters<'a>,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    messages: Vec<ChatMessage<'a>>,
    data_sources: Vec<DataSource<'a>>,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

fn require<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str, CompletionError> {
    value
        .as_deref()
        .ok_or_else(|| CompletionError::Config(format!("{name} is required for chat")))
}

fn build_request<'a>(
    message: &'a str,
    search_endpoint: &'a str,
    index_name: &'a str,
    search_key: &'a str,
) -> ChatCompletionRequest<'a> {
    ChatCompletionRequest {
        messages: vec![
            ChatMessage {
                role: "system",
                content: SYSTEM_PROMPT,
            },
            ChatMessage {
                role: "user",
                content: message,
            },
        ],
        data_sources: vec![DataSource {
            kind: "azure_search",
            parameters: SearchParameters {
                endpoint: search_endpoint,
                index_name,
                authentication: SearchAuthentication {
                    kind: "api_key",
                    key: search_key,
                },
            },
        }],
    }
}

/// Send a single chat message and return the assistant's reply.
///
/// Returns the first choice's text, or [`NO_RESPONSE_PLACEHOLDER`] when the
/// upstream answers with no choices or a null content.
pub async fn complete(
    client: &Client,
    config: &CompletionConfig,
    message: &str,
) -> Result<String, CompletionError> {
    let endpoint = require(&config.endpoint, "AZURE_OPENAI_ENDPOINT")?;
    let api_key = require(&config.api_key, "AZURE_OPENAI_API_KEY")?;
    let deployment = require(
        &config.deployment,
        "AZURE_OPENAI_CHAT_COMPLETIONS_DEPLOYMENT_NAME",
    )?;
    let search_endpoint = require(&config.search.endpoint, "AZURE_SEARCH_SERVICE_ENDPOINT")?;
    let search_key = require(&config.search.api_key, "AZURE_SEARCH_SERVICE_ADMIN_KEY")?;
    let index_name = require(&config.search.index_name, "SEARCH_INDEX_NAME")?;

    let url = format!(
        "{}/openai/deployments/{}/chat/completions?api-version={}",
        endpoint.trim_end_matches('/'),
        deployment,
        config.api_version,
    );

    let request = build_request(message, search_endpoint, index_name, search_key);

    let resp = client
        .post(&url)
        .header("api-key", api_key)
        .json(&request)
        .send()
        .await
        .map_err(|e| CompletionError::Provider(format!("chat completion request failed: {e}")))?;

    let status = resp.status();
    let body = resp
        .text()
        .await
        .unwrap_or_else(|_| "<no body>".to_string());

    // Raw upstream response, for diagnostics only.
    debug!(%status, body = %body, "chat completion response");

    if !status.is_success() {
        return Err(CompletionError::Provider(format!(
            "chat completion failed: {status} {body}"
        )));
    }

    let parsed: ChatCompletionResponse = serde_json::from_str(&body)
        .map_err(|e| CompletionError::Provider(format!("chat response parse error: {e}")))?;

    Ok(parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .unwrap_or_else(|| NO_RESPONSE_PLACEHOLDER.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> CompletionConfig {
        CompletionConfig {
            endpoint: Some("https://example.openai.azure.com".into()),
            api_key: Some("openai-key".into()),
            deployment: Some("gpt-4o".into()),
            api_version: DEFAULT_API_VERSION.into(),
            embedding_model: None,
            search: SearchConfig {
                endpoint: Some("https://example.search.windows.net".into()),
                api_key: Some("search-key".into()),
                index_name: Some("wellness-index".into()),
            },
        }
    }

    #[test]
    fn request_body_carries_two_turns_and_search_source() {
        let request = build_request(
            "I feel overwhelmed",
            "https://example.search.windows.net",
            "wellness-index",
            "search-key",
        );
        let body = serde_json::to_value(&request).expect("serialize");

        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], SYSTEM_PROMPT);
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "I feel overwhelmed");

        let source = &body["data_sources"][0];
        assert_eq!(source["type"], "azure_search");
        assert_eq!(
            source["parameters"]["endpoint"],
            "https://example.search.windows.net"
        );
        assert_eq!(source["parameters"]["index_name"], "wellness-index");
        assert_eq!(source["parameters"]["authentication"]["type"], "api_key");
        assert_eq!(source["parameters"]["authentication"]["key"], "search-key");
    }

    #[test]
    fn empty_choices_yields_placeholder() {
        let parsed: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices": []}"#).expect("parse");
        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_else(|| NO_RESPONSE_PLACEHOLDER.to_string());
        assert_eq!(text, NO_RESPONSE_PLACEHOLDER);
    }

    #[test]
    fn missing_choices_field_yields_placeholder() {
        let parsed: ChatCompletionResponse = serde_json::from_str(r#"{"id": "x"}"#).expect("parse");
        assert!(parsed.choices.is_empty());
    }

    #[test]
    fn first_choice_content_is_extracted() {
        let parsed: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"content": "You matter."}},
                            {"message": {"content": "ignored"}}]}"#,
        )
        .expect("parse");
        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_else(|| NO_RESPONSE_PLACEHOLDER.to_string());
        assert_eq!(text, "You matter.");
    }

    #[tokio::test]
    async fn missing_config_fails_before_any_request() {
        let mut config = configured();
        config.api_key = None;

        let client = Client::new();
        let err = complete(&client, &config, "hello").await.unwrap_err();
        assert!(matches!(err, CompletionError::Config(_)));
        assert!(err.to_string().contains("AZURE_OPENAI_API_KEY"));
    }
}
