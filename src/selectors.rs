//! Shared Selectors

use once_cell::sync::Lazy;
use scraper::Selector;

/// Selector matching every element.
pub static ANY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("*").expect("valid universal selector"));

/// Selector for top-level headings.
pub static H1_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1").expect("valid h1 selector"));

/// Selector for the document `<title>`; inline `<svg><title>` is not a page title.
pub static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("head > title").expect("valid title selector"));

/// Selector for the semantic restaurant-name test marker.
pub static RESTAURANT_NAME_MARKER_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"[data-testid="restaurant-name"]"#).expect("valid restaurant marker selector")
});

/// Selector for restaurant-name class tokens (plain and CSS-module hashed).
pub static RESTAURANT_NAME_CLASS_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"[class*="restaurant-name"], [class*="restaurantName"]"#)
        .expect("valid restaurant class selector")
});

/// Compile a static list of selectors, preserving order.
pub(crate) fn compile_all(sources: &[&str]) -> Vec<Selector> {
    sources
        .iter()
        .map(|s| Selector::parse(s).unwrap_or_else(|_| panic!("valid selector: {s}")))
        .collect()
}
