//! Menu extraction engine.
//!
//! Parser → name resolver and item locator → field extractor (per candidate)
//! → aggressive fallback when nothing was kept → dedup → result.

mod dedupe;
mod document;
mod fallback;
mod fields;
mod image;
mod locator;
mod name;
mod style;
mod tests;
pub mod types;

pub use dedupe::{dedup_key, dedupe_items};
pub use document::Document;
pub use image::{is_placeholder, looks_like_image, normalize_image_url};
pub use locator::{
    default_strategies, locate_items, CurrencyTextStrategy, LocateStrategy, Located,
    SelectorStrategy,
};
pub use name::{resolve_restaurant_name, NameStrategy, NAME_STRATEGIES};
pub use style::{background_image_url, first_srcset_url};
pub use types::*;

use crate::error::{ParseError, Result};
use fallback::aggressive_fallback;
use fields::extract_item;
use locator::DEFAULT_STRATEGIES;

/// Extract the restaurant name and menu from a page fetched from `page_url`.
///
/// Relative image paths are resolved against the page's origin.
pub fn extract_menu(html: &str, page_url: &str) -> Result<ExtractionResult> {
    let opts = ExtractOptions::for_url(page_url)?;
    Ok(extract_menu_with(html, &opts)?)
}

/// Extract with explicit options and the built-in locator strategies.
pub fn extract_menu_with(
    html: &str,
    opts: &ExtractOptions,
) -> std::result::Result<ExtractionResult, ParseError> {
    let doc = Document::parse(html)?;
    Ok(extract_document(&doc, &DEFAULT_STRATEGIES, opts))
}

/// Run the full pipeline over an already parsed document.
pub fn extract_document(
    doc: &Document,
    strategies: &[Box<dyn LocateStrategy>],
    opts: &ExtractOptions,
) -> ExtractionResult {
    let restaurant_name = resolve_restaurant_name(doc, opts);

    let located = locate_items(doc.root(), strategies, opts);
    let mut items: Vec<MenuItem> = located
        .elements
        .iter()
        .filter_map(|el| extract_item(*el, opts))
        .collect();

    let used_fallback = items.is_empty();
    if used_fallback {
        tracing::debug!(
            candidates = located.elements.len(),
            "no items from locator, trying aggressive fallback"
        );
        items = aggressive_fallback(doc, opts);
    }

    let items = dedupe_items(items);
    tracing::info!(
        restaurant = %restaurant_name,
        items = items.len(),
        strategy = located.strategy.as_deref().unwrap_or("none"),
        fallback = used_fallback,
        "menu extracted"
    );

    ExtractionResult {
        restaurant_name,
        items,
    }
}
