//! String utility functions
//!
//! Normalization helpers for the text users type into metadata fields.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EXIF_DATE_TIME: Regex =
        Regex::new(r"^\d{4}:\d{2}:\d{2} \d{2}:\d{2}:\d{2}$").expect("valid EXIF date regex");
    static ref ISO_DATE_TIME: Regex =
        Regex::new(r"^(\d{4})-(\d{2})-(\d{2})[T ](\d{2}):(\d{2})(?::(\d{2}))?").expect("valid ISO date regex");
}

/// Returns the text with `prefix` removed, if present
pub fn strip_prefix<'a>(text: &'a str, prefix: &str) -> &'a str {
    let text = text.trim();
    text.strip_prefix(prefix).unwrap_or(text)
}

/// Returns the text with `suffix` removed, compared case-insensitively
pub fn strip_suffix_ignore_case<'a>(text: &'a str, suffix: &str) -> &'a str {
    let text = text.trim();
    if text.len() >= suffix.len() {
        let split = text.len() - suffix.len();
        if text.is_char_boundary(split) && text[split..].eq_ignore_ascii_case(suffix) {
            return &text[..split];
        }
    }
    text
}

/// Brings a date into EXIF `YYYY:MM:DD HH:MM:SS` form where possible
///
/// EXIF-form input is returned as is; ISO-like `YYYY-MM-DDTHH:MM[:SS]`
/// (optionally followed by fractions or a zone, which are dropped) is
/// rewritten. Anything else is returned unchanged.
pub fn normalize_date_time(value: &str) -> String {
    let value = value.trim();
    if EXIF_DATE_TIME.is_match(value) {
        return value.to_string();
    }

    match ISO_DATE_TIME.captures(value) {
        Some(caps) => format!(
            "{}:{}:{} {}:{}:{}",
            &caps[1], &caps[2], &caps[3], &caps[4], &caps[5],
            caps.get(6).map_or("00", |m| m.as_str())
        ),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_date_time() {
        assert_eq!(normalize_date_time("2024:05:01 10:20:30"), "2024:05:01 10:20:30");
        assert_eq!(normalize_date_time("2024-05-01T10:20:30"), "2024:05:01 10:20:30");
        assert_eq!(normalize_date_time("2024-05-01 10:20"), "2024:05:01 10:20:00");
        assert_eq!(normalize_date_time("2024-05-01T10:20:30.250Z"), "2024:05:01 10:20:30");
        assert_eq!(normalize_date_time("last summer"), "last summer");
    }

    #[test]
    fn test_strip_affixes() {
        assert_eq!(strip_prefix(" f/2.8 ", "f/"), "2.8");
        assert_eq!(strip_prefix("F/2.8", "f/"), "F/2.8");
        assert_eq!(strip_suffix_ignore_case("35mm", "mm"), "35");
        assert_eq!(strip_suffix_ignore_case("35 MM", "mm"), "35 ");
        assert_eq!(strip_suffix_ignore_case("m", "mm"), "m");
    }
}
