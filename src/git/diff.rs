use std::borrow::Cow;

use crate::constants::diff::TRUNCATION_MARKER;

/// Bounds a diff to `max_chars` characters before it is sent to the service.
///
/// Diffs within the bound are returned unchanged. Longer diffs keep their first
/// `max_chars` characters followed by [`TRUNCATION_MARKER`]. Lengths are counted
/// in Unicode scalar values, so the cut never splits a multibyte character.
///
/// # Example
/// ```
/// use commit_gpt::git::diff::truncate_diff;
///
/// assert_eq!(truncate_diff("+fn main() {}", 8000), "+fn main() {}");
/// assert_eq!(truncate_diff("abcdef", 3), "abc\n\n... (diff truncated)");
/// ```
pub fn truncate_diff(diff: &str, max_chars: usize) -> Cow<'_, str> {
    match diff.char_indices().nth(max_chars) {
        None => Cow::Borrowed(diff),
        Some((boundary, _)) => {
            tracing::debug!(
                "Diff truncated to {} chars ({} bytes kept of {})",
                max_chars,
                boundary,
                diff.len()
            );
            Cow::Owned(format!("{}{}", &diff[..boundary], TRUNCATION_MARKER))
        }
    }
}
