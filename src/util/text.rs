// src/util/text.rs

/// Extract the first non-empty line of `text`, truncated to `max_chars`.
///
/// Truncation counts characters, not bytes, and marks the cut with `…`
/// (the ellipsis is included in the limit).
///
/// # Examples
///
/// ```
/// use notes_client::util::text::summarize;
///
/// assert_eq!(summarize("\n  What is a Tree?\nSecond line", 60), "What is a Tree?");
/// assert_eq!(summarize("abcdefgh", 5), "abcd…");
/// ```
pub fn summarize(text: &str, max_chars: usize) -> String {
    let first = text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("");

    if first.chars().count() <= max_chars {
        return first.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }

    let mut out: String = first.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}
