//! Image discovery and URL normalization.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Selector};

use super::document::attr;
use super::style::{background_image_url, first_srcset_url};
use super::types::ExtractOptions;
use crate::selectors::compile_all;

static IMAGE_EXTENSION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\.(jpe?g|png|webp|gif|avif)(\?|#|$)").expect("valid regex")
});

static SCHEME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").expect("valid regex"));

/// Path tokens that mark a URL as image-like even without an extension.
const IMAGE_PATH_TOKENS: &[&str] = &["image", "photo", "compressed_webp", "food-cms"];

/// Direct and lazy-load source attributes, in priority order.
const SOURCE_ATTRS: &[&str] = &["src", "data-src", "data-lazy", "data-original", "data-bg"];

/// Image-bearing descendants, most specific first.
static IMAGE_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    compile_all(&[
        r#"[class*="placeholder"] img[class*="realImage"]"#,
        r#"[class*="menuItemPhoto"] img[class*="realImage"]"#,
        r#"img[class*="realImage"]"#,
        r#"[class*="placeholder"] img"#,
        r#"[class*="menuItemPhoto"] img"#,
        r#"[class*="menuItemPhoto"]"#,
        r#"[class*="placeholder"]"#,
        r#"[class*="itemPhoto"]"#,
        r#"[class*="foodPhoto"]"#,
        r#"[class*="productPhoto"]"#,
        r#"[class*="FoodImage"]"#,
        r#"[class*="foodImage"]"#,
        r#"[class*="ItemImage"]"#,
        r#"[class*="itemImage"]"#,
        r#"div[style*="background-image"]"#,
        "img",
        r#"[class*="image"]"#,
        r#"[class*="photo"]"#,
        r#"[class*="picture"]"#,
    ])
});

/// First accepted image URL among `scope`'s descendants.
///
/// Selectors are tried in order; within a selector, matching elements are
/// tried in document order. The first URL that survives normalization wins.
pub(crate) fn resolve_image(scope: ElementRef<'_>, opts: &ExtractOptions) -> Option<String> {
    IMAGE_SELECTORS.iter().find_map(|selector| {
        scope
            .select(selector)
            .find_map(|el| element_image(el, opts))
    })
}

/// Accepted image URL of one element, trying its source kinds in priority order.
pub(crate) fn element_image(el: ElementRef<'_>, opts: &ExtractOptions) -> Option<String> {
    image_sources(el)
        .into_iter()
        .find_map(|src| normalize_image_url(&src, opts))
}

/// Raw source candidates of one element: direct/lazy attributes, then the
/// inline background image, then the first `srcset` entry.
pub(crate) fn image_sources(el: ElementRef<'_>) -> Vec<String> {
    let mut sources: Vec<String> = SOURCE_ATTRS
        .iter()
        .filter_map(|name| attr(el, name))
        .map(str::to_string)
        .collect();
    if let Some(bg) = attr(el, "style").and_then(background_image_url) {
        sources.push(bg);
    }
    if let Some(first) = attr(el, "srcset").and_then(first_srcset_url) {
        sources.push(first);
    }
    sources
}

/// Resolve a discovered image reference into an absolute URL, or reject it.
///
/// # Examples
/// ```
/// use menucrawl::tools::extract::{normalize_image_url, ExtractOptions};
///
/// let opts = ExtractOptions::default().with_origin("https://food.example.com");
/// assert_eq!(
///     normalize_image_url("//cdn.x/y.png", &opts).as_deref(),
///     Some("https://cdn.x/y.png")
/// );
/// assert_eq!(
///     normalize_image_url("/path/a.png", &opts).as_deref(),
///     Some("https://food.example.com/path/a.png")
/// );
/// assert_eq!(normalize_image_url("/icons/plus-white.svg", &opts), None);
/// ```
pub fn normalize_image_url(raw: &str, opts: &ExtractOptions) -> Option<String> {
    let src = raw.trim();
    if src.is_empty() || is_placeholder(src, opts) {
        return None;
    }

    let url = if let Some(rest) = src.strip_prefix("//") {
        format!("https://{rest}")
    } else if src.starts_with('/') {
        format!("{}{src}", opts.origin)
    } else if !SCHEME_REGEX.is_match(src) {
        format!("{}/{src}", opts.origin)
    } else {
        src.to_string()
    };

    looks_like_image(&url).then_some(url)
}

/// Known blank/placeholder image, or a data URI with no payload.
pub fn is_placeholder(src: &str, opts: &ExtractOptions) -> bool {
    if opts
        .placeholder_patterns
        .iter()
        .any(|p| !p.is_empty() && src.contains(p.as_str()))
    {
        return true;
    }
    is_data_uri(src) && src.split_once(',').map_or(true, |(_, payload)| payload.trim().is_empty())
}

/// Whether an absolute URL plausibly points at an image.
pub fn looks_like_image(url: &str) -> bool {
    if is_data_uri(url) {
        return url
            .get(..11)
            .map_or(false, |head| head.eq_ignore_ascii_case("data:image/"));
    }
    let lower = url.to_ascii_lowercase();
    if !(lower.starts_with("https://") || lower.starts_with("http://")) {
        return false;
    }
    IMAGE_EXTENSION_REGEX.is_match(url) || IMAGE_PATH_TOKENS.iter().any(|t| lower.contains(t))
}

fn is_data_uri(src: &str) -> bool {
    src.get(..5)
        .map_or(false, |head| head.eq_ignore_ascii_case("data:"))
}
