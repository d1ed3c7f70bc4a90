//! Shared helpers for logging extracted facts.

/// Maximum character length for content in logs (avoids dumping huge strings).
pub(crate) const MAX_LOG_CONTENT_LEN: usize = 400;

/// Truncates a string for logging on a char boundary; appends "..." if truncated.
pub(crate) fn truncate_for_log(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        None => s.to_string(),
        Some((idx, _)) => format!("{}...", &s[..idx]),
    }
}
