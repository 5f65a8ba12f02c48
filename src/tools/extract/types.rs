use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};
use crate::tools::clean::{clean, clean_price};

/// Sentinel used when no restaurant name strategy matched.
pub const UNKNOWN_RESTAURANT: &str = "Unknown Restaurant";

/// Origin used for relative image references when no page URL is known.
pub const DEFAULT_ORIGIN: &str = "https://food.grab.com";

/// Knobs for one extraction call.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractOptions {
    /// Absolute origin (`scheme://host[:port]`) prefixed onto relative image paths.
    pub origin: String,
    /// Tokens whose presence marks a text as price-bearing.
    pub currency_markers: Vec<String>,
    /// Substrings identifying blank/placeholder images.
    pub placeholder_patterns: Vec<String>,
    /// Restaurant name reported when nothing else matched.
    pub fallback_name: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            currency_markers: vec!["₫".into(), "VND".into()],
            placeholder_patterns: vec![
                "plus-white.svg".into(),
                "placeholder.svg".into(),
                "blank.svg".into(),
                "loading.gif".into(),
            ],
            fallback_name: UNKNOWN_RESTAURANT.to_string(),
        }
    }
}

impl ExtractOptions {
    /// Default options with the origin taken from the page URL.
    pub fn for_url(page_url: &str) -> Result<Self> {
        Ok(Self::default().with_origin(origin_of(page_url)?))
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into().trim_end_matches('/').to_string();
        self
    }

    /// Whether `text` contains any configured currency marker.
    pub fn has_currency(&self, text: &str) -> bool {
        self.currency_markers
            .iter()
            .any(|m| !m.is_empty() && text.contains(m.as_str()))
    }
}

/// Absolute origin of a page URL, e.g. `https://food.grab.com`.
pub fn origin_of(page_url: &str) -> Result<String> {
    let url = Url::parse(page_url.trim()).map_err(|_| Error::InvalidUrl(page_url.into()))?;
    let origin = url.origin();
    if !origin.is_tuple() {
        return Err(Error::InvalidUrl(page_url.into()));
    }
    Ok(origin.ascii_serialization())
}

/// A menu item whose name and price both resolved.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub name: String,
    /// Raw, currency-formatted price text (e.g. `"25.000 ₫"`).
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl MenuItem {
    /// Build an item from raw texts. Returns `None` unless the cleaned name is
    /// non-empty and the cleaned price contains at least one digit.
    pub fn new(name: &str, price: &str, image_url: Option<String>) -> Option<Self> {
        let name = clean(name);
        let price = clean_price(price);
        if name.is_empty() || !price.chars().any(|c| c.is_ascii_digit()) {
            return None;
        }
        Some(Self {
            name,
            price,
            image_url,
        })
    }
}

/// Result of one extraction call.
///
/// An empty `items` list is a valid outcome, not an error.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub restaurant_name: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

impl ExtractionResult {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
