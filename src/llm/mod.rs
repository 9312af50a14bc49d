//! LLM abstractions and prompt building.
//!
//! This module defines the provider interface used by the commit message
//! pipeline.

/// Prompt-building utilities.
pub mod prompt;
/// Built-in provider implementations and factory helpers.
pub mod provider;

use async_trait::async_trait;

use crate::error::{CommitGptError, Result};

/// Unified interface implemented by text-generation providers.
///
/// # Architecture
///
/// The only **required** methods are [`send_prompt`](Self::send_prompt),
/// which sends a pre-built `(system, user)` prompt pair and returns the raw
/// response text, and [`name`](Self::name).
/// [`generate_commit_message`](Self::generate_commit_message) is a default
/// implementation that builds the prompt via [`prompt`] and cleans the
/// response.
///
/// # Implementer Notes
/// 1. Implement `Send + Sync` (required in async contexts).
/// 2. Map service failures to the error taxonomy inside `send_prompt`
///    (`QuotaExceeded`, `InvalidCredential`, `ServiceError`). Do not retry.
///
/// # Built-In Implementations
/// - [`OpenAIProvider`](provider::openai::OpenAIProvider) - OpenAI/compatible API
///
/// # Custom Provider Example
/// ```no_run
/// use async_trait::async_trait;
/// use commit_gpt::error::Result;
/// use commit_gpt::llm::LLMProvider;
///
/// struct EchoProvider;
///
/// #[async_trait]
/// impl LLMProvider for EchoProvider {
///     async fn send_prompt(&self, _system: &str, _user: &str) -> Result<String> {
///         Ok("chore: update files".to_string())
///     }
///
///     fn name(&self) -> &str {
///         "echo"
///     }
/// }
/// ```
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Sends a pre-built prompt pair to the service and returns the first
    /// candidate's raw text.
    async fn send_prompt(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;

    /// Generates a single-line commit message for a staged diff.
    ///
    /// # Errors
    /// - [`CommitGptError::NoStagedChanges`] if `diff` is blank
    /// - [`CommitGptError::ServiceError`] if the cleaned response is empty
    /// - any error returned by [`send_prompt`](Self::send_prompt)
    async fn generate_commit_message(&self, diff: &str, max_diff_chars: usize) -> Result<String> {
        if diff.trim().is_empty() {
            return Err(CommitGptError::NoStagedChanges);
        }

        let (system, user) = prompt::build_commit_prompt(diff, max_diff_chars);
        tracing::debug!(
            "Commit prompt split - system ({} chars), user ({} chars)",
            system.len(),
            user.len()
        );

        let response = self.send_prompt(&system, &user).await?;
        provider::response::process_commit_response(&response)
    }

    /// Provider name (used in logs).
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::diff::{MAX_DIFF_CHARS, TRUNCATION_MARKER};
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    /// Records the last user prompt and replies with a fixed response
    struct RecordingProvider {
        response: String,
        last_user_prompt: Mutex<Option<String>>,
    }

    impl RecordingProvider {
        fn new(response: &str) -> Self {
            Self {
                response: response.to_string(),
                last_user_prompt: Mutex::new(None),
            }
        }

        fn last_user_prompt(&self) -> Option<String> {
            self.last_user_prompt.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LLMProvider for RecordingProvider {
        async fn send_prompt(&self, _system_prompt: &str, user_prompt: &str) -> Result<String> {
            *self.last_user_prompt.lock().unwrap() = Some(user_prompt.to_string());
            Ok(self.response.clone())
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    #[tokio::test]
    async fn test_generate_strips_quotes_and_whitespace() {
        let provider = RecordingProvider::new("  \"feat(api): add user endpoint\"\n");
        let message = provider
            .generate_commit_message("+fn user() {}", MAX_DIFF_CHARS)
            .await
            .unwrap();
        assert_eq!(message, "feat(api): add user endpoint");
    }

    #[tokio::test]
    async fn test_generate_blank_diff_skips_service() {
        let provider = RecordingProvider::new("feat: unused");
        let err = provider
            .generate_commit_message(" \n\t", MAX_DIFF_CHARS)
            .await
            .unwrap_err();
        assert!(matches!(err, CommitGptError::NoStagedChanges));
        assert!(provider.last_user_prompt().is_none());
    }

    #[tokio::test]
    async fn test_generate_empty_response_is_service_error() {
        let provider = RecordingProvider::new("  \"\" ");
        let err = provider
            .generate_commit_message("+x", MAX_DIFF_CHARS)
            .await
            .unwrap_err();
        assert!(matches!(err, CommitGptError::ServiceError(_)));
    }

    #[tokio::test]
    async fn test_generate_submits_truncated_diff() {
        let provider = RecordingProvider::new("chore: bulk update");
        let diff = "d".repeat(MAX_DIFF_CHARS * 2);
        provider
            .generate_commit_message(&diff, MAX_DIFF_CHARS)
            .await
            .unwrap();

        let user = provider.last_user_prompt().unwrap();
        assert!(user.ends_with(&format!(
            "{}{}",
            "d".repeat(MAX_DIFF_CHARS),
            TRUNCATION_MARKER
        )));
    }
}
