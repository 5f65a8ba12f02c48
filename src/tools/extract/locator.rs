//! Item locator: ordered strategies, first non-empty candidate set wins.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

use super::document::own_text;
use super::types::ExtractOptions;
use crate::selectors::ANY_SELECTOR;

/// One way of finding menu-item elements within a scope.
pub trait LocateStrategy: Send + Sync {
    fn label(&self) -> &str;

    /// Matching elements among `scope`'s descendants, in document order.
    fn locate<'a>(&self, scope: ElementRef<'a>, opts: &ExtractOptions) -> Vec<ElementRef<'a>>;
}

/// Elements matching a CSS selector.
pub struct SelectorStrategy {
    source: String,
    selector: Selector,
}

impl SelectorStrategy {
    /// `None` if `source` is not a valid selector.
    pub fn new(source: &str) -> Option<Self> {
        Some(Self {
            source: source.to_string(),
            selector: Selector::parse(source).ok()?,
        })
    }
}

impl LocateStrategy for SelectorStrategy {
    fn label(&self) -> &str {
        &self.source
    }

    fn locate<'a>(&self, scope: ElementRef<'a>, _opts: &ExtractOptions) -> Vec<ElementRef<'a>> {
        scope.select(&self.selector).collect()
    }
}

/// Elements whose own text (not their descendants') carries a currency marker.
pub struct CurrencyTextStrategy;

impl LocateStrategy for CurrencyTextStrategy {
    fn label(&self) -> &str {
        "currency-text"
    }

    fn locate<'a>(&self, scope: ElementRef<'a>, opts: &ExtractOptions) -> Vec<ElementRef<'a>> {
        scope
            .select(&ANY_SELECTOR)
            .filter(|el| opts.has_currency(&own_text(*el)))
            .collect()
    }
}

/// Exact item/menu container markers.
const EXACT_SELECTORS: &[&str] = &[
    ".menuItem",
    r#"[data-testid="menu-item"]"#,
    ".menu-item",
    ".food-item",
    ".item-card",
    ".product-item",
    ".dish-item",
];

/// Partial class-name matches: hashed CSS-module names first, then generic words.
const PARTIAL_SELECTORS: &[&str] = &[
    r#"[class*="menuItem"]"#,
    r#"[class*="foodItem"]"#,
    r#"[class*="productItem"]"#,
    r#"[class*="itemCard"]"#,
    r#"[class*="item"]"#,
    r#"[class*="product"]"#,
    r#"[class*="dish"]"#,
    r#"[class*="food"]"#,
];

/// Built-in strategies, most specific first.
pub fn default_strategies() -> Vec<Box<dyn LocateStrategy>> {
    let mut strategies: Vec<Box<dyn LocateStrategy>> = EXACT_SELECTORS
        .iter()
        .chain(PARTIAL_SELECTORS)
        .filter_map(|s| SelectorStrategy::new(s))
        .map(|s| Box::new(s) as Box<dyn LocateStrategy>)
        .collect();
    strategies.push(Box::new(CurrencyTextStrategy));
    strategies
}

pub(crate) static DEFAULT_STRATEGIES: Lazy<Vec<Box<dyn LocateStrategy>>> =
    Lazy::new(default_strategies);

/// Candidate set adopted by the locator.
pub struct Located<'a> {
    /// Label of the adopted strategy, `None` when every strategy came up empty.
    pub strategy: Option<String>,
    pub elements: Vec<ElementRef<'a>>,
}

/// Evaluate `strategies` in order and adopt the first non-empty result.
///
/// Results are never merged across strategies.
pub fn locate_items<'a>(
    scope: ElementRef<'a>,
    strategies: &[Box<dyn LocateStrategy>],
    opts: &ExtractOptions,
) -> Located<'a> {
    for strategy in strategies {
        let elements = strategy.locate(scope, opts);
        if !elements.is_empty() {
            tracing::debug!(
                strategy = strategy.label(),
                candidates = elements.len(),
                "item locator adopted strategy"
            );
            return Located {
                strategy: Some(strategy.label().to_string()),
                elements,
            };
        }
    }
    Located {
        strategy: None,
        elements: Vec::new(),
    }
}
