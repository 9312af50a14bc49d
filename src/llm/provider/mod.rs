pub mod openai;
pub mod response;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

use std::time::Duration;

use reqwest::Client;

use crate::config::{AppConfig, NetworkConfig};
use crate::error::{CommitGptError, Result};
use crate::llm::LLMProvider;

/// 创建 HTTP 客户端
///
/// 每个 provider 持有自己的客户端，生命周期与单次调用相同。
pub(crate) fn create_http_client(network_config: &NetworkConfig) -> Result<Client> {
    let user_agent = format!(
        "{}/{} ({})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(network_config.request_timeout))
        .connect_timeout(Duration::from_secs(network_config.connect_timeout))
        .build()
        .map_err(|e| CommitGptError::ServiceError(format!("failed to create HTTP client: {}", e)))
}

/// 根据配置创建 LLM Provider
///
/// # Errors
/// - [`CommitGptError::MissingCredential`] if no API key was loaded; no
///   network activity happens in that case.
pub fn create_provider(config: &AppConfig) -> Result<Box<dyn LLMProvider>> {
    let provider = openai::OpenAIProvider::new(&config.llm, &config.network)?;
    Ok(Box::new(provider))
}
