//! Response handling
//!
//! Cleans generated commit messages and maps service error bodies onto the
//! error taxonomy.

use serde::Deserialize;

use crate::error::{CommitGptError, Result};

/// Error preview maximum length
const ERROR_PREVIEW_LENGTH: usize = 500;

/// OpenAI error envelope: `{"error": {"message": ..., "type": ..., "code": ...}}`
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: Option<String>,
    #[serde(rename = "type", default)]
    error_type: Option<String>,
    /// Usually a string, sometimes null or numeric on compatible services
    #[serde(default)]
    code: Option<serde_json::Value>,
}

/// Truncate string for error preview (safe handling of multibyte characters)
pub fn truncate_for_preview(s: &str) -> String {
    match s.char_indices().nth(ERROR_PREVIEW_LENGTH) {
        None => s.to_string(),
        Some((boundary, _)) => format!("{}...", &s[..boundary]),
    }
}

/// Strips one leading and one trailing quote when both ends carry one.
///
/// Either `"` or `'` counts; the two ends need not match.
pub fn strip_wrapping_quotes(s: &str) -> &str {
    let is_quote = |c: char| c == '"' || c == '\'';
    let mut chars = s.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) if is_quote(first) && is_quote(last) => &s[1..s.len() - 1],
        _ => s,
    }
}

/// Clean commit message response: trim whitespace, then strip wrapping quotes
pub fn clean_commit_response(response: &str) -> String {
    strip_wrapping_quotes(response.trim()).to_string()
}

/// Process commit message response: clean, reject empty output, and log
pub fn process_commit_response(response: &str) -> Result<String> {
    let cleaned = clean_commit_response(response);
    if cleaned.trim().is_empty() {
        return Err(CommitGptError::ServiceError(
            "empty commit message returned".to_string(),
        ));
    }
    tracing::debug!("Generated commit message: {}", cleaned);
    Ok(cleaned)
}

/// Maps a non-success HTTP response onto the error taxonomy.
///
/// `insufficient_quota` becomes [`CommitGptError::QuotaExceeded`],
/// `invalid_api_key` becomes [`CommitGptError::InvalidCredential`], and
/// everything else is a [`CommitGptError::ServiceError`].
pub fn map_api_error(status: u16, body: &str) -> CommitGptError {
    let parsed = serde_json::from_str::<ApiErrorResponse>(body).ok();

    let code = parsed
        .as_ref()
        .and_then(|r| r.error.code.as_ref())
        .and_then(|c| c.as_str());
    let error_type = parsed.as_ref().and_then(|r| r.error.error_type.as_deref());

    if code == Some("insufficient_quota") || error_type == Some("insufficient_quota") {
        return CommitGptError::QuotaExceeded;
    }
    if code == Some("invalid_api_key") {
        return CommitGptError::InvalidCredential;
    }

    let detail = parsed
        .and_then(|r| r.error.message)
        .unwrap_or_else(|| truncate_for_preview(body));
    CommitGptError::ServiceError(format!("{} {}", status, detail))
}
