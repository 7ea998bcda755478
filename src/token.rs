use crate::error::{Result, StoreError};

/// Required token length, in characters
pub const TOKEN_LEN: usize = 64;

/// Check a namespace token: length first, then format
///
/// Length is counted in chars, so a character outside the Basic Multilingual
/// Plane counts once here where a UTF-16 count would see two.
pub fn validate(token: &str) -> Result<()> {
    let actual = token.chars().count();
    if actual != TOKEN_LEN {
        return Err(StoreError::TokenLength { actual });
    }
    if !is_valid_format(token) {
        return Err(StoreError::TokenFormat);
    }
    Ok(())
}

/// Accepted token format
///
/// The token must not contain a line terminator, and its trailing run of
/// `[a-z0-9]` characters must include at least one lowercase letter.
/// Anything may precede that run. This is deliberately loose; tightening it
/// changes which existing tokens are accepted.
pub fn is_valid_format(token: &str) -> bool {
    if token.chars().any(is_line_terminator) {
        return false;
    }
    token
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .any(|c| c.is_ascii_lowercase())
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Shorten a token for log output
pub(crate) fn redact(token: &str) -> String {
    let head: String = token.chars().take(6).collect();
    format!("{head}…")
}
