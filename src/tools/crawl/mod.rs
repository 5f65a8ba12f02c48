//! Crawl Tools
//!
//! Link validation → fetch → extraction, one page at a time or many with
//! bounded concurrency. No links are followed.

pub mod types;

pub use types::*;

use chrono::Utc;
use futures_util::stream::{self, StreamExt};
use url::Url;

use crate::error::{Error, Result};
use crate::tools::extract::{extract_menu_with, origin_of};
use crate::tools::fetch::fetch_with;
use crate::types::Config;

/// Check that `url` is an http(s) link on one of the allowed hosts.
pub fn validate_link(url: &str, allowed_hosts: &[String]) -> Result<Url> {
    let parsed = Url::parse(url.trim()).map_err(|_| Error::InvalidUrl(url.into()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::InvalidLink(url.into()));
    }
    let host = parsed
        .host_str()
        .ok_or_else(|| Error::InvalidUrl(url.into()))?
        .to_ascii_lowercase();

    let allowed = allowed_hosts.is_empty()
        || allowed_hosts.iter().any(|h| {
            let h = h.trim().trim_start_matches('.').to_ascii_lowercase();
            host == h || host.ends_with(&format!(".{h}"))
        });
    if !allowed {
        return Err(Error::InvalidLink(url.into()));
    }
    Ok(parsed)
}

/// Fetch one restaurant page and extract its menu.
///
/// Relative images resolve against the page reached after redirects.
pub async fn crawl(url: &str, config: &Config) -> Result<CrawlReport> {
    let page = validate_link(url, &config.crawl.allowed_hosts)?;
    let fetched = fetch_with(page.as_str(), &config.fetch).await?;
    let fetched_at = Utc::now();

    let origin = origin_of(&fetched.final_url)
        .unwrap_or_else(|_| page.origin().ascii_serialization());
    let opts = config.extract.clone().with_origin(origin);
    let html = fetched.html;

    let result = tokio::task::spawn_blocking(move || extract_menu_with(&html, &opts))
        .await
        .map_err(|e| Error::Task(e.to_string()))??;

    Ok(CrawlReport {
        url: url.to_string(),
        fetched_at,
        fetch_ms: fetched.duration_ms,
        profile_used: fetched.profile_used,
        result,
    })
}

/// Crawl many pages, at most `config.crawl.concurrency` at a time.
///
/// Each page is independent: one failure does not affect the others.
/// Results come back in input order.
pub async fn crawl_all(urls: Vec<String>, config: &Config) -> Vec<(String, Result<CrawlReport>)> {
    let concurrency = config.crawl.concurrency.max(1);
    stream::iter(urls)
        .map(|url| async move {
            let res = crawl(&url, config).await;
            if let Err(e) = &res {
                tracing::warn!(url = %url, error = %e, "crawl failed");
            }
            (url, res)
        })
        .buffered(concurrency)
        .collect()
        .await
}
