//! Document parsing and the text helpers every strategy shares.

use scraper::html::Select;
use scraper::{ElementRef, Html, Selector};

use crate::error::ParseError;

/// A parsed page. Owned by a single extraction call.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse raw markup.
    ///
    /// Malformed markup (unclosed tags, stray end tags, bad nesting) is repaired
    /// the way a browser would. Only input that is not text at all is refused.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        if raw.contains('\0') {
            return Err(ParseError::Binary);
        }
        Ok(Self {
            html: Html::parse_document(raw),
        })
    }

    /// Parse raw bytes, which must be UTF-8.
    pub fn from_bytes(raw: &[u8]) -> Result<Self, ParseError> {
        let text = std::str::from_utf8(raw).map_err(|e| ParseError::Encoding {
            offset: e.valid_up_to(),
        })?;
        Self::parse(text)
    }

    /// The `<html>` element; every other element is its descendant.
    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    pub fn select<'a, 'b>(&'a self, selector: &'b Selector) -> Select<'a, 'b> {
        self.html.select(selector)
    }
}

/// Full descendant text, trimmed.
pub(crate) fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Text of the element's direct text-node children only.
pub(crate) fn own_text(el: ElementRef<'_>) -> String {
    el.children()
        .filter_map(|n| n.value().as_text())
        .map(|t| &**t)
        .collect()
}

/// Elements that start a new rendered line.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li",
    "main", "nav", "ol", "p", "pre", "section", "table", "tbody", "td", "tfoot", "th",
    "thead", "tr", "ul",
];

/// Descendant text split into trimmed, non-empty lines.
///
/// Inline markup is joined into the surrounding text; lines break at `<br>`,
/// at block-level element boundaries and at literal newlines.
pub(crate) fn text_lines(el: ElementRef<'_>) -> Vec<String> {
    let mut buf = String::new();
    push_rendered_text(el, &mut buf);
    buf.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

fn push_rendered_text(el: ElementRef<'_>, buf: &mut String) {
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            buf.push_str(text);
            continue;
        }
        let Some(child) = ElementRef::wrap(child) else {
            continue;
        };
        match child.value().name() {
            "br" => buf.push('\n'),
            "script" | "style" | "template" => {}
            tag if BLOCK_TAGS.contains(&tag) => {
                buf.push('\n');
                push_rendered_text(child, buf);
                buf.push('\n');
            }
            _ => push_rendered_text(child, buf),
        }
    }
}

/// Nearest ancestor that is an element.
pub(crate) fn parent_element(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.parent().and_then(ElementRef::wrap)
}

/// Attribute value, trimmed, if present and non-empty.
pub(crate) fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value()
        .attr(name)
        .map(str::trim)
        .filter(|v| !v.is_empty())
}
