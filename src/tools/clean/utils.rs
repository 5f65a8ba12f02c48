/// Private helper functions for text cleaning
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Normalize Unicode to NFC (Canonical Composition).
///
/// Vietnamese menus mix precomposed and combining diacritics; NFC makes
/// `ướ` compare equal regardless of how the page encoded it.
pub(super) fn normalize_unicode(text: &str) -> String {
    text.nfc().collect::<String>()
}

/// Remove zero-width characters that are invisible but break comparisons.
pub(super) fn remove_zero_width_chars(text: &str) -> String {
    text.chars()
        .filter(|c| {
            !matches!(
                *c,
                '\u{200B}' | // Zero width space
                '\u{200C}' | // Zero width non-joiner
                '\u{200D}' | // Zero width joiner
                '\u{2060}' | // Word joiner
                '\u{FEFF}'   // Zero width no-break space (BOM)
            )
        })
        .collect()
}

/// Replace control characters with spaces (newlines and tabs included).
///
/// They are mapped to a space rather than dropped so that words split across
/// lines stay separated once whitespace is collapsed.
pub(super) fn remove_control_chars(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Collapse whitespace runs (including NBSP) to a single space and trim.
pub(super) fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_REGEX.replace_all(text, " ").trim().to_string()
}
