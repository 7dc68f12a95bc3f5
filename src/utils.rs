//! Shared text helpers used across modules.

use unicode_width::UnicodeWidthStr;

/// Truncate a string to `max_len` characters, appending "..." if truncated.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        format!("{}...", take_chars(s, max_len - 3))
    } else {
        take_chars(s, max_len)
    }
}

/// First `n` characters of `s`, no ellipsis.
pub fn take_chars(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

/// Terminal columns `s` occupies (emoji count as two).
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Right-pad `s` with spaces to `width` display columns.
/// Strings already at or past `width` are returned unchanged.
pub fn pad_display(s: &str, width: usize) -> String {
    let w = display_width(s);
    let mut out = String::with_capacity(s.len() + width.saturating_sub(w));
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(w)));
    out
}

/// Center `s` within `width` display columns; extra space goes right.
pub fn center_display(s: &str, width: usize) -> String {
    let left = width.saturating_sub(display_width(s)) / 2;
    pad_display(&format!("{}{}", " ".repeat(left), s), width)
}
