use thiserror::Error;

pub type Result<T> = std::result::Result<T, CommitGptError>;

/// Hint shown under any error whose message mentions the API key
pub const API_KEY_HINT: &str =
    "Set your OpenAI API key:\n  export OPENAI_API_KEY=your_api_key_here";

#[derive(Error, Debug)]
pub enum CommitGptError {
    #[error("Not a git repository. Please run this command in a git repository.")]
    NotARepository,

    #[error("OpenAI API key not found. The OPENAI_API_KEY environment variable is required")]
    MissingCredential,

    #[error("No staged changes found")]
    NoStagedChanges,

    #[error("OpenAI API quota exceeded. Please check your billing.")]
    QuotaExceeded,

    #[error("Invalid OpenAI API key. Please check your OPENAI_API_KEY environment variable.")]
    InvalidCredential,

    #[error("OpenAI API error: {0}")]
    ServiceError(String),

    #[error("Failed to commit changes: {0}")]
    CommitFailed(String),

    /// `git diff --cached` could not be run
    #[error("Git command failed: {0}")]
    GitCommand(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration parsing error: {0}")]
    ConfigParse(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CommitGptError {
    /// 获取错误的解决建议
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            CommitGptError::NoStagedChanges => {
                Some("Tip: Stage your changes first with git add .")
            }
            e if e.to_string().contains("API key") => Some(API_KEY_HINT),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestion_no_staged_changes() {
        let err = CommitGptError::NoStagedChanges;
        assert_eq!(
            err.suggestion(),
            Some("Tip: Stage your changes first with git add .")
        );
    }

    #[test]
    fn test_suggestion_for_api_key_errors() {
        for err in [
            CommitGptError::MissingCredential,
            CommitGptError::InvalidCredential,
            CommitGptError::ServiceError("Incorrect API key provided".to_string()),
        ] {
            assert!(err.to_string().contains("API key"), "{err}");
            assert_eq!(err.suggestion(), Some(API_KEY_HINT));
        }
    }

    #[test]
    fn test_suggestion_returns_none_for_other_errors() {
        let cases = vec![
            CommitGptError::NotARepository,
            CommitGptError::QuotaExceeded,
            CommitGptError::ServiceError("500 Internal Server Error".to_string()),
            CommitGptError::CommitFailed("pre-commit hook failed".to_string()),
            CommitGptError::GitCommand("fatal: bad revision".to_string()),
            CommitGptError::Config("network.request_timeout cannot be 0".to_string()),
        ];

        for err in cases {
            assert!(
                err.suggestion().is_none(),
                "Expected None for {:?}, got {:?}",
                err,
                err.suggestion()
            );
        }
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            CommitGptError::ServiceError("timeout".to_string()).to_string(),
            "OpenAI API error: timeout"
        );
        assert_eq!(
            CommitGptError::CommitFailed("nothing to commit".to_string()).to_string(),
            "Failed to commit changes: nothing to commit"
        );
    }
}
