//! Fixed-width line wrapping of encoded text
//!
//! [`wrap`] breaks text into lines of `width` characters. [`unwrap`] is the
//! lenient cleanup applied before decoding: it drops every line break no
//! matter where it sits, so it accepts output wrapped at any width.

/// Insert a newline after every `width` characters.
///
/// A `width` of zero or less returns the text unchanged. No newline is added
/// before the first character or after the last one. Widths count
/// characters, not bytes.
pub fn wrap(text: &str, width: i64) -> String {
    let width = match usize::try_from(width) {
        Ok(w) if w > 0 => w,
        _ => return text.to_string(),
    };

    let mut result = String::with_capacity(text.len() + text.len() / width);
    for (i, c) in text.chars().enumerate() {
        if i > 0 && i % width == 0 {
            result.push('\n');
        }
        result.push(c);
    }
    result
}

/// Remove all `\n` and `\r` characters, then trim surrounding whitespace.
pub fn unwrap(text: &str) -> String {
    let joined: String = text.chars().filter(|&c| c != '\n' && c != '\r').collect();
    joined.trim().to_string()
}
