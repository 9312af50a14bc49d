mod app;
mod llm;
mod network;

pub use app::{AppConfig, UIConfig};
pub use llm::LLMConfig;
pub use network::NetworkConfig;
