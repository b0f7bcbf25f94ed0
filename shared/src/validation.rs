use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::constants::{DEFAULT_EMOJI_SIZE, MAX_EMOJI_SIZE, MIN_EMOJI_SIZE};

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex color pattern compiles")
});

pub fn validate_hex_color(color: &str) -> Result<(), ValidationError> {
    if !HEX_COLOR.is_match(color) {
        return Err(ValidationError::new("invalid_hex_color"));
    }
    Ok(())
}

/// Reads a leading integer the way a browser `parseInt` does: leading
/// whitespace and an optional sign are accepted, and parsing stops at the
/// first non-digit. Returns `None` when no digit is found.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(10) else { break };
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(i64::from(d));
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Emoji sizes arrive as slider text; anything unreadable falls back to the
/// default and the result is kept inside the slider's range.
pub fn coerce_emoji_size(raw: &str) -> u32 {
    match parse_leading_int(raw) {
        Some(size) => size.clamp(i64::from(MIN_EMOJI_SIZE), i64::from(MAX_EMOJI_SIZE)) as u32,
        None => DEFAULT_EMOJI_SIZE,
    }
}
