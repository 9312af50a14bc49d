//! Configuration loading and structures.
//!
//! Effective configuration is merged from (low to high):
//! 1. Rust defaults (`Default` + `serde(default)`)
//! 2. User-level config file (`~/.config/commit-gpt/config.toml` on Linux)
//! 3. `COMMIT_GPT__*` environment variables
//!
//! The API credential is never read from a file; it comes from `OPENAI_API_KEY`.

mod loader;
mod structs;

pub use loader::{get_config_dir, get_config_path, load_config, load_config_from};
pub use structs::{AppConfig, LLMConfig, NetworkConfig, UIConfig};
