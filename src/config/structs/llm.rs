//! Text-generation service configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{diff, llm};
use crate::error::{CommitGptError, Result};

/// LLM configuration.
///
/// # Fields
/// - `model`: chat model name (default: `gpt-4o-mini`)
/// - `endpoint`: OpenAI-compatible base URL or full chat-completions URL (optional)
/// - `api_key`: filled from `OPENAI_API_KEY` at load time, never read from a file
/// - `max_tokens`: response length cap (default: `100`)
/// - `temperature`: sampling temperature in `0.0..=2.0` (default: `0.7`)
/// - `max_diff_chars`: diff length bound before truncation (default: `8000`)
///
/// # Example
/// ```toml
/// [llm]
/// model = "gpt-4o-mini"
/// endpoint = "https://api.deepseek.com"
/// max_tokens = 100
/// temperature = 0.7
/// max_diff_chars = 8000
/// ```
#[derive(Clone, Deserialize, Serialize)]
pub struct LLMConfig {
    /// Model name.
    #[serde(default = "default_model")]
    pub model: String,

    /// API endpoint.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// API key.
    #[serde(skip)]
    pub api_key: Option<String>,

    /// Maximum generated token count.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature in `0.0..=2.0`.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum diff length in characters sent to the service.
    #[serde(default = "default_max_diff_chars")]
    pub max_diff_chars: usize,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: None,
            api_key: None,
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            max_diff_chars: default_max_diff_chars(),
        }
    }
}

impl std::fmt::Debug for LLMConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::llm::provider::utils::mask_api_key;
        let masked_key = self.api_key.as_deref().map(mask_api_key);
        f.debug_struct("LLMConfig")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("api_key", &masked_key)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("max_diff_chars", &self.max_diff_chars)
            .finish()
    }
}

impl LLMConfig {
    /// Validates LLM configuration.
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(CommitGptError::Config("llm.model cannot be empty".into()));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(CommitGptError::Config(format!(
                "llm.temperature {} out of range [0.0, 2.0]",
                self.temperature
            )));
        }
        if self.max_tokens == 0 {
            return Err(CommitGptError::Config("llm.max_tokens cannot be 0".into()));
        }
        if self.max_diff_chars == 0 {
            return Err(CommitGptError::Config(
                "llm.max_diff_chars cannot be 0".into(),
            ));
        }
        Ok(())
    }
}

fn default_model() -> String {
    llm::DEFAULT_MODEL.to_string()
}

fn default_max_tokens() -> u32 {
    llm::DEFAULT_MAX_TOKENS
}

fn default_temperature() -> f32 {
    llm::DEFAULT_TEMPERATURE
}

fn default_max_diff_chars() -> usize {
    diff::MAX_DIFF_CHARS
}
