use std::path::Path;
use std::process::Command;

use crate::error::{CommitGptError, Result};

/// Execute git commit
///
/// Use git CLI to support:
/// - GPG signature (commit.gpgsign, user.signingkey)
/// - Git hooks (pre-commit, commit-msg, etc.)
/// - All git config configurations
///
/// # Arguments
/// * `workdir` - Directory the command runs in
/// * `message` - Commit message, passed verbatim as the single `-m` argument
pub fn commit_changes(workdir: &Path, message: &str) -> Result<()> {
    tracing::debug!("Running git commit in {}", workdir.display());

    let output = Command::new("git")
        .args(["commit", "-m", message])
        .current_dir(workdir)
        .output()
        .map_err(|e| CommitGptError::CommitFailed(e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let error_msg = if stderr.trim().is_empty() {
            // Some git errors are output to stdout instead of stderr
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        } else {
            stderr.trim().to_string()
        };
        return Err(CommitGptError::CommitFailed(error_msg));
    }

    Ok(())
}
