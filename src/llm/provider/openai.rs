use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::response::{map_api_error, truncate_for_preview};
use super::utils::resolve_chat_endpoint;
use crate::config::{LLMConfig, NetworkConfig};
use crate::error::{CommitGptError, Result};
use crate::llm::LLMProvider;

/// OpenAI API provider
///
/// Sends one chat-completions request per call (system + user message) and
/// returns the first choice's text. Works with any OpenAI-compatible service
/// through `llm.endpoint`.
///
/// # Configuration example
/// ```toml
/// [llm]
/// model = "gpt-4o-mini"
/// endpoint = "https://api.openai.com" # optional
/// max_tokens = 100
/// temperature = 0.7
/// ```
///
/// The API key always comes from `OPENAI_API_KEY`.
///
/// # Example
/// ```no_run
/// use commit_gpt::config::{LLMConfig, NetworkConfig};
/// use commit_gpt::llm::{LLMProvider, provider::openai::OpenAIProvider};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = LLMConfig {
///     api_key: Some("sk-...".to_string()),
///     ..Default::default()
/// };
/// let provider = OpenAIProvider::new(&config, &NetworkConfig::default())?;
///
/// let diff = "diff --git a/main.rs b/main.rs\n+fn main() {}";
/// let message = provider.generate_commit_message(diff, 8000).await?;
/// println!("Generated: {}", message);
/// # Ok(())
/// # }
/// ```
pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct OpenAIRequest<'a> {
    model: &'a str,
    messages: [MessagePayload<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct MessagePayload<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct OpenAIResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAIProvider {
    /// Builds the provider from explicit configuration.
    ///
    /// # Errors
    /// - [`CommitGptError::MissingCredential`] when `config.api_key` is `None`
    pub fn new(config: &LLMConfig, network_config: &NetworkConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or(CommitGptError::MissingCredential)?;

        Ok(Self {
            client: super::create_http_client(network_config)?,
            api_key,
            endpoint: resolve_chat_endpoint(config.endpoint.as_deref()),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Converts a transport failure into a `ServiceError` with its cause
    fn transport_error(e: reqwest::Error) -> CommitGptError {
        let kind = if e.is_timeout() {
            "request timed out"
        } else if e.is_connect() {
            "connection failed"
        } else {
            "request failed"
        };
        tracing::debug!("OpenAI API {} : {}", kind, e);
        CommitGptError::ServiceError(format!("{}: {}", kind, e))
    }
}

#[async_trait]
impl LLMProvider for OpenAIProvider {
    async fn send_prompt(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let request = OpenAIRequest {
            model: &self.model,
            messages: [
                MessagePayload {
                    role: "system",
                    content: system_prompt,
                },
                MessagePayload {
                    role: "user",
                    content: user_prompt,
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        tracing::debug!(
            "OpenAI API request: endpoint={}, model={}, temperature={}, max_tokens={}, system_len={}, user_len={}",
            self.endpoint,
            self.model,
            self.temperature,
            self.max_tokens,
            system_prompt.len(),
            user_prompt.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        let response_text = response.text().await.map_err(Self::transport_error)?;

        tracing::debug!("OpenAI API response status: {}", status);
        tracing::debug!("OpenAI API response body: {}", response_text);

        if !status.is_success() {
            return Err(map_api_error(status.as_u16(), &response_text));
        }

        let response_body: OpenAIResponse = serde_json::from_str(&response_text).map_err(|e| {
            CommitGptError::ServiceError(format!(
                "failed to parse response: {}. Raw response: {}",
                e,
                truncate_for_preview(&response_text)
            ))
        })?;

        response_body
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or_else(|| CommitGptError::ServiceError("response contained no choices".into()))
    }

    fn name(&self) -> &str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use pretty_assertions::assert_eq;

    use crate::llm::provider::test_utils::{
        ensure_crypto_provider, test_llm_config, test_network_config,
    };

    fn provider_for(server: &Server) -> OpenAIProvider {
        OpenAIProvider::new(
            &test_llm_config(server.url(), Some("sk-test".to_string())),
            &test_network_config(),
        )
        .unwrap()
    }

    #[test]
    fn test_missing_credential() {
        ensure_crypto_provider();
        let config = test_llm_config("http://127.0.0.1:9".to_string(), None);
        let err = OpenAIProvider::new(&config, &test_network_config())
            .err()
            .unwrap();
        assert!(matches!(err, CommitGptError::MissingCredential));
    }

    #[tokio::test]
    async fn test_openai_success_response_parsing() {
        ensure_crypto_provider();
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", "Bearer sk-test")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"feat: add login"}}]}"#)
            .create_async()
            .await;

        let provider = provider_for(&server);
        let result = provider.send_prompt("system", "hi").await.unwrap();
        assert_eq!(result, "feat: add login");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_request_body_shape() {
        ensure_crypto_provider();
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "model": "gpt-4o-mini",
                "max_tokens": 100,
                "temperature": 0.7,
                "messages": [
                    {"role": "system", "content": "rules"},
                    {"role": "user", "content": "diff"}
                ]
            })))
            .with_status(200)
            .with_body(r#"{"choices":[{"message":{"content":"ok"}}]}"#)
            .create_async()
            .await;

        let provider = provider_for(&server);
        provider.send_prompt("rules", "diff").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_quota_exceeded_is_not_retried() {
        ensure_crypto_provider();
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(429)
            .with_body(
                r#"{"error":{"message":"You exceeded your current quota","type":"insufficient_quota","code":"insufficient_quota"}}"#,
            )
            .expect(1)
            .create_async()
            .await;

        let provider = provider_for(&server);
        let err = provider.send_prompt("system", "hi").await.unwrap_err();
        assert!(matches!(err, CommitGptError::QuotaExceeded));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_invalid_api_key() {
        ensure_crypto_provider();
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(401)
            .with_body(
                r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error","code":"invalid_api_key"}}"#,
            )
            .create_async()
            .await;

        let provider = provider_for(&server);
        let err = provider.send_prompt("system", "hi").await.unwrap_err();
        assert!(matches!(err, CommitGptError::InvalidCredential));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_server_error_is_service_error() {
        ensure_crypto_provider();
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(500)
            .with_body("Internal Server Error")
            .create_async()
            .await;

        let provider = provider_for(&server);
        let err = provider.send_prompt("system", "hi").await.unwrap_err();
        match err {
            CommitGptError::ServiceError(detail) => assert!(detail.contains("500")),
            other => panic!("Expected ServiceError, got {:?}", other),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_no_choices_is_service_error() {
        ensure_crypto_provider();
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let provider = provider_for(&server);
        let err = provider.send_prompt("system", "hi").await.unwrap_err();
        assert!(matches!(err, CommitGptError::ServiceError(_)));
    }

    #[tokio::test]
    async fn test_malformed_body_is_service_error() {
        ensure_crypto_provider();
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let provider = provider_for(&server);
        let err = provider.send_prompt("system", "hi").await.unwrap_err();
        match err {
            CommitGptError::ServiceError(detail) => assert!(detail.contains("failed to parse")),
            other => panic!("Expected ServiceError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_connection_refused_is_service_error() {
        ensure_crypto_provider();
        // 端口 9 (discard) 通常没有监听
        let provider = OpenAIProvider::new(
            &test_llm_config("http://127.0.0.1:9".to_string(), Some("sk-test".into())),
            &test_network_config(),
        )
        .unwrap();

        let err = provider.send_prompt("system", "hi").await.unwrap_err();
        assert!(matches!(err, CommitGptError::ServiceError(_)));
    }
}
