//! Test utilities for provider tests
//!
//! Common configuration builders shared by unit and integration tests.

use crate::config::{LLMConfig, NetworkConfig};

/// 在测试中安装 rustls crypto provider
///
/// reqwest + rustls-no-provider 需要手动安装 crypto provider，
/// 生产代码在 main.rs 中完成，测试需要单独调用。
/// 多次调用是安全的（install_default 失败时忽略即可）。
pub fn ensure_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

/// Create a `NetworkConfig` with short timeouts for mock servers.
pub fn test_network_config() -> NetworkConfig {
    NetworkConfig {
        request_timeout: 10,
        connect_timeout: 2,
    }
}

/// Create an `LLMConfig` pointed at a mock server
///
/// # Example
/// ```
/// use commit_gpt::llm::provider::test_utils::test_llm_config;
///
/// let config = test_llm_config("http://localhost:8080".to_string(), Some("sk-test".to_string()));
/// assert_eq!(config.endpoint.as_deref(), Some("http://localhost:8080"));
/// assert_eq!(config.model, "gpt-4o-mini");
/// ```
pub fn test_llm_config(base_url: String, api_key: Option<String>) -> LLMConfig {
    LLMConfig {
        endpoint: Some(base_url),
        api_key,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_config_keeps_defaults() {
        let config = test_llm_config("http://test.com".to_string(), None);
        assert_eq!(config.endpoint, Some("http://test.com".to_string()));
        assert_eq!(config.api_key, None);
        assert_eq!(config.max_tokens, 100);
        assert_eq!(config.max_diff_chars, 8000);
    }
}
