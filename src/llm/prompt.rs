use crate::git::diff::truncate_diff;

/// Static system directives for commit message generation
const COMMIT_SYSTEM_PROMPT: &str = r#"You are an expert git commit message generator. Analyze the git diff and create a concise, clear commit message following Conventional Commits format.

Rules:
- Use format: type(scope): description
- Types: feat, fix, docs, style, refactor, test, chore, perf, ci, build
- Keep under 50 characters for the subject line
- Be specific about what changed
- Use imperative mood (e.g., "add" not "added")
- No period at the end

Examples:
- feat(auth): add OAuth login support
- fix(api): handle null user validation
- docs(readme): update installation guide
- refactor(utils): simplify date formatting"#;

/// Lead-in placed before the diff in the user message
const COMMIT_USER_PREFIX: &str = "Generate a commit message for these changes:\n\n";

/// Builds the `(system, user)` prompt pair for commit message generation.
///
/// The diff is bounded to `max_diff_chars` characters first (see
/// [`truncate_diff`]).
pub fn build_commit_prompt(diff: &str, max_diff_chars: usize) -> (String, String) {
    let diff = truncate_diff(diff, max_diff_chars);
    let user = format!("{}{}", COMMIT_USER_PREFIX, diff);
    (COMMIT_SYSTEM_PROMPT.to_string(), user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::diff::{MAX_DIFF_CHARS, TRUNCATION_MARKER};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_system_prompt_lists_all_types() {
        let (system, _) = build_commit_prompt("+x", MAX_DIFF_CHARS);
        for ty in [
            "feat", "fix", "docs", "style", "refactor", "test", "chore", "perf", "ci", "build",
        ] {
            assert!(system.contains(ty), "missing type {ty}");
        }
        assert!(system.contains("type(scope): description"));
        assert!(system.contains("under 50 characters"));
        assert!(system.contains("imperative mood"));
        assert!(system.contains("No period at the end"));
    }

    #[test]
    fn test_user_prompt_embeds_short_diff_verbatim() {
        let diff = "diff --git a/src/lib.rs b/src/lib.rs\n+pub fn add() {}\n";
        let (_, user) = build_commit_prompt(diff, MAX_DIFF_CHARS);
        assert_eq!(
            user,
            format!("Generate a commit message for these changes:\n\n{}", diff)
        );
        assert!(!user.contains(TRUNCATION_MARKER));
    }

    #[test]
    fn test_user_prompt_embeds_truncated_diff() {
        let diff = "z".repeat(MAX_DIFF_CHARS + 100);
        let (_, user) = build_commit_prompt(&diff, MAX_DIFF_CHARS);
        let expected_diff = format!("{}{}", "z".repeat(MAX_DIFF_CHARS), TRUNCATION_MARKER);
        assert!(user.ends_with(&expected_diff));
        assert_eq!(user.len(), COMMIT_USER_PREFIX.len() + expected_diff.len());
    }

    #[test]
    fn test_custom_bound_is_honored() {
        let (_, user) = build_commit_prompt("abcdefghij", 4);
        assert!(user.ends_with("abcd\n\n... (diff truncated)"));
    }
}
