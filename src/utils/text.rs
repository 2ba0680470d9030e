//! Character-safe text truncation.

const ELLIPSIS: &str = "...";

/// Truncates `text` to at most `max_chars` characters, ending with `...`
/// when anything was cut.
///
/// Works on `char` boundaries, so multi-byte text never panics.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_chars("hello world", 8), "hello...");
/// assert_eq!(truncate_chars("short", 8), "short");
/// ```
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}
