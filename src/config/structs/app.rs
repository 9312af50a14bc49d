//! Top-level application configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::llm::LLMConfig;
use super::network::NetworkConfig;

/// Application configuration.
///
/// # Configuration File Locations
/// - Linux: `~/.config/commit-gpt/config.toml`
/// - macOS: `~/Library/Application Support/commit-gpt/config.toml`
/// - Windows: `%APPDATA%\commit-gpt\config\config.toml`
///
/// # Example
/// ```toml
/// [llm]
/// model = "gpt-4o-mini"
/// temperature = 0.7
///
/// [network]
/// request_timeout = 60
///
/// [ui]
/// colored = true
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Text-generation service settings.
    #[serde(default)]
    pub llm: LLMConfig,

    /// HTTP timeout settings.
    #[serde(default)]
    pub network: NetworkConfig,

    /// Terminal UI behavior.
    #[serde(default)]
    pub ui: UIConfig,
}

impl AppConfig {
    /// Validates configuration consistency.
    pub fn validate(&self) -> Result<()> {
        self.llm.validate()?;
        self.network.validate()?;
        Ok(())
    }
}

/// UI configuration.
///
/// # Example
/// ```toml
/// [ui]
/// colored = false
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UIConfig {
    /// Whether to enable color output.
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self { colored: true }
    }
}

fn default_true() -> bool {
    true
}
