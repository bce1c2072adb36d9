//! Log sanitization utilities for caller-supplied text.
//!
//! Query strings reach the logs verbatim otherwise, which lets a client forge
//! log lines with embedded newlines or flood them with huge values.

/// Longest caller-supplied value written to the logs, in characters.
pub const MAX_LOGGED_CHARS: usize = 200;

/// Make caller-supplied text safe to log.
///
/// Control characters (including newlines) are escaped and the result is
/// truncated to [`MAX_LOGGED_CHARS`] characters, with `...` appended when cut.
///
/// # Examples
/// ```ignore
/// assert_eq!(sanitize_for_log("bos"), "bos");
/// assert_eq!(sanitize_for_log("a\nb"), "a\\nb");
/// ```
pub fn sanitize_for_log(value: &str) -> String {
    let mut out = String::with_capacity(value.len().min(MAX_LOGGED_CHARS));
    for (count, c) in value.chars().enumerate() {
        if count == MAX_LOGGED_CHARS {
            out.push_str("...");
            break;
        }
        if c.is_control() {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    out
}
