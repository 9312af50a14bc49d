//! Provider utility functions
//!
//! Endpoint resolution and credential masking.

/// OpenAI chat-completions path
pub const OPENAI_API_SUFFIX: &str = "/v1/chat/completions";

/// OpenAI default base URL
pub const DEFAULT_OPENAI_BASE: &str = "https://api.openai.com";

/// Resolves the chat-completions URL from an optional configured endpoint.
///
/// Accepts a bare host, a versioned base (`.../v1`), or a full
/// `.../chat/completions` URL, with or without a trailing slash.
///
/// # Example
/// ```
/// use commit_gpt::llm::provider::utils::resolve_chat_endpoint;
///
/// assert_eq!(
///     resolve_chat_endpoint(None),
///     "https://api.openai.com/v1/chat/completions"
/// );
/// assert_eq!(
///     resolve_chat_endpoint(Some("https://api.deepseek.com/v1/")),
///     "https://api.deepseek.com/v1/chat/completions"
/// );
/// ```
pub fn resolve_chat_endpoint(endpoint: Option<&str>) -> String {
    let base = endpoint
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_OPENAI_BASE)
        .trim_end_matches('/');

    if base.ends_with("/chat/completions") {
        base.to_string()
    } else if base.ends_with("/v1") {
        format!("{}/chat/completions", base)
    } else {
        format!("{}{}", base, OPENAI_API_SUFFIX)
    }
}

/// Mask API key to prevent log leaks
///
/// Keys longer than 8 characters keep their first and last 4 characters;
/// anything shorter becomes `****`.
///
/// # Example
/// ```
/// use commit_gpt::llm::provider::utils::mask_api_key;
///
/// assert_eq!(mask_api_key("sk-proj-abcdefgh"), "sk-p...efgh");
/// assert_eq!(mask_api_key("short"), "****");
/// ```
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
