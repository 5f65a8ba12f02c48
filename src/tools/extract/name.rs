use scraper::Selector;

use super::document::{text_of, Document};
use super::types::ExtractOptions;
use crate::selectors::{
    H1_SELECTOR, RESTAURANT_NAME_CLASS_SELECTOR, RESTAURANT_NAME_MARKER_SELECTOR, TITLE_SELECTOR,
};
use crate::tools::clean::clean;

/// A single way of finding the restaurant name.
pub type NameStrategy = fn(&Document) -> Option<String>;

/// Name strategies, first non-empty result wins.
pub const NAME_STRATEGIES: &[(&str, NameStrategy)] = &[
    ("heading", from_heading),
    ("marker", from_marker),
    ("class", from_class),
    ("title", from_title),
];

/// Restaurant display name, or the configured sentinel. Never fails.
pub fn resolve_restaurant_name(doc: &Document, opts: &ExtractOptions) -> String {
    NAME_STRATEGIES
        .iter()
        .find_map(|(label, strategy)| {
            let name = strategy(doc)?;
            tracing::debug!(strategy = *label, name = %name, "restaurant name resolved");
            Some(name)
        })
        .unwrap_or_else(|| opts.fallback_name.clone())
}

fn first_text(doc: &Document, selector: &Selector) -> Option<String> {
    doc.select(selector)
        .next()
        .map(|el| clean(&text_of(el)))
        .filter(|t| !t.is_empty())
}

/// Text of the first `<h1>`.
fn from_heading(doc: &Document) -> Option<String> {
    first_text(doc, &H1_SELECTOR)
}

/// Text of the `data-testid="restaurant-name"` element.
fn from_marker(doc: &Document) -> Option<String> {
    first_text(doc, &RESTAURANT_NAME_MARKER_SELECTOR)
}

/// Text of the first element with a restaurant-name class token.
fn from_class(doc: &Document) -> Option<String> {
    first_text(doc, &RESTAURANT_NAME_CLASS_SELECTOR)
}

/// `<title>` text up to the first `|`.
fn from_title(doc: &Document) -> Option<String> {
    let title = doc.select(&TITLE_SELECTOR).next().map(text_of)?;
    let head = title.split('|').next().unwrap_or_default();
    Some(clean(head)).filter(|t| !t.is_empty())
}
