//! Text parsing for inline `style` and `srcset` attribute values.

use once_cell::sync::Lazy;
use regex::Regex;

static BACKGROUND_URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)background(?:-image)?\s*:[^;]*?url\(\s*['"]?([^'")]+?)['"]?\s*\)"#)
        .expect("valid regex")
});

/// URL inside a `background-image: url(...)` (or `background:` shorthand) declaration.
pub fn background_image_url(style: &str) -> Option<String> {
    BACKGROUND_URL_REGEX
        .captures(style)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|u| !u.is_empty())
}

/// First candidate URL of a responsive `srcset` value.
pub fn first_srcset_url(srcset: &str) -> Option<String> {
    srcset
        .split(|c: char| c == ',' || c.is_whitespace())
        .find(|part| !part.is_empty())
        .map(str::to_string)
}
