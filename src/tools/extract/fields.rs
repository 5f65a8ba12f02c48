//! Per-candidate name/price/image resolution.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

use super::document::{own_text, text_lines, text_of};
use super::image::resolve_image;
use super::types::{ExtractOptions, MenuItem};
use crate::selectors::{compile_all, ANY_SELECTOR};
use crate::tools::clean::clean;

static NAME_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    compile_all(&[
        r#"[class*="itemNameDescription"]"#,
        r#"[class*="itemName"]"#,
        r#"[class*="foodName"]"#,
        r#"[class*="productName"]"#,
        r#"[class*="dishName"]"#,
        ".itemName",
        ".item-name",
        ".food-name",
        ".product-name",
        ".dish-name",
        "h3",
        "h4",
        "h5",
        "h6",
        r#"[class*="name"]"#,
        r#"[class*="title"]"#,
        "span",
        "div",
        "p",
    ])
});

static PRICE_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    compile_all(&[
        r#"[class*="itemPrice"]"#,
        r#"[class*="foodPrice"]"#,
        r#"[class*="productPrice"]"#,
        r#"[class*="price"]"#,
        r#"[class*="cost"]"#,
        r#"[class*="amount"]"#,
        ".itemPrice",
        ".item-price",
        ".food-price",
        ".product-price",
        ".price",
    ])
});

/// Resolve one candidate into an item, or `None` if name or price is missing.
pub(crate) fn extract_item(el: ElementRef<'_>, opts: &ExtractOptions) -> Option<MenuItem> {
    let mut name = find_name(el, opts);
    let mut price = find_price(el, opts);

    if name.is_none() || price.is_none() {
        let (line_name, line_price) = split_lines(&text_lines(el), opts);
        name = name.or(line_name);
        price = price.or(line_price);
    }

    let item = MenuItem::new(&name?, &price?, resolve_image(el, opts))?;
    tracing::debug!(name = %item.name, price = %item.price, image = ?item.image_url, "found item");
    Some(item)
}

/// Judged on the cleaned text, the same form [`MenuItem::new`] keeps.
pub(crate) fn is_name_text(text: &str, opts: &ExtractOptions) -> bool {
    let text = clean(text);
    text.chars().count() > 2 && !opts.has_currency(&text)
}

fn is_price_text(text: &str, opts: &ExtractOptions) -> bool {
    !text.is_empty() && (opts.has_currency(text) || text.chars().any(|c| c.is_ascii_digit()))
}

/// Selectors are tried in order; within one selector, matches are checked in
/// document order. The first acceptable text wins.
fn first_accepted(
    el: ElementRef<'_>,
    selectors: &[Selector],
    accept: impl Fn(&str) -> bool,
) -> Option<String> {
    selectors
        .iter()
        .find_map(|selector| el.select(selector).map(text_of).find(|t| accept(t)))
}

fn find_name(el: ElementRef<'_>, opts: &ExtractOptions) -> Option<String> {
    first_accepted(el, &NAME_SELECTORS, |t| is_name_text(t, opts))
}

fn find_price(el: ElementRef<'_>, opts: &ExtractOptions) -> Option<String> {
    first_accepted(el, &PRICE_SELECTORS, |t| is_price_text(t, opts)).or_else(|| {
        // Last structured check: a descendant whose own text carries the currency.
        el.select(&ANY_SELECTOR)
            .find(|d| opts.has_currency(&own_text(*d)))
            .map(text_of)
    })
}

/// Line fallback: first name-like line and first price-like line.
///
/// A line may satisfy both (e.g. "Combo 2 người" has a digit and no currency).
fn split_lines(lines: &[String], opts: &ExtractOptions) -> (Option<String>, Option<String>) {
    let name = lines.iter().find(|l| is_name_text(l, opts)).cloned();
    let price = lines.iter().find(|l| is_price_text(l, opts)).cloned();
    (name, price)
}
