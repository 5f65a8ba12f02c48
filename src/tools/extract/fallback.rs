use super::document::{own_text, parent_element, text_of, Document};
use super::fields::is_name_text;
use super::image::resolve_image;
use super::types::{ExtractOptions, MenuItem};
use crate::selectors::ANY_SELECTOR;

/// Whole-document scan used when the locator pipeline kept nothing.
///
/// Every element whose own text carries a currency marker is treated as a
/// price; the name is the first other text inside its parent.
pub(crate) fn aggressive_fallback(doc: &Document, opts: &ExtractOptions) -> Vec<MenuItem> {
    let mut items = Vec::new();

    for el in doc.select(&ANY_SELECTOR) {
        if !opts.has_currency(&own_text(el)) {
            continue;
        }
        let price = text_of(el);
        let scope = parent_element(el).unwrap_or(el);

        let name = scope
            .select(&ANY_SELECTOR)
            .map(text_of)
            .find(|t| *t != price && is_name_text(t, opts));

        let Some(name) = name else { continue };
        if let Some(item) = MenuItem::new(&name, &price, resolve_image(scope, opts)) {
            tracing::debug!(name = %item.name, price = %item.price, "fallback found item");
            items.push(item);
        }
    }

    items
}
