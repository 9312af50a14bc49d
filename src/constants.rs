//! 全局常量定义

/// LLM 相关常量
pub mod llm {
    /// Default chat model
    pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

    /// Response length cap for a single subject line
    pub const DEFAULT_MAX_TOKENS: u32 = 100;

    pub const DEFAULT_TEMPERATURE: f32 = 0.7;

    /// Credential environment variable
    pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
}

/// Diff 相关常量
pub mod diff {
    /// Maximum diff length (in characters) submitted to the service
    pub const MAX_DIFF_CHARS: usize = 8000;

    /// Appended to a diff clipped at [`MAX_DIFF_CHARS`]
    pub const TRUNCATION_MARKER: &str = "\n\n... (diff truncated)";
}

/// Network 相关常量
pub mod network {
    pub const DEFAULT_REQUEST_TIMEOUT: u64 = 120;

    pub const DEFAULT_CONNECT_TIMEOUT: u64 = 10;
}
