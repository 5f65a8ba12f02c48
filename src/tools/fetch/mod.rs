//! Fetch collaborator: one page, browser-like headers, bounded timeout.
//!
//! Retrying is left to the caller.

mod client;
mod headers;
mod profile;
mod tests;
mod utils;

pub mod types;

pub use types::*;

use client::build_client;
use dashmap::DashMap;
use headers::headers_for_profile;
use once_cell::sync::Lazy;
use reqwest::header::{HeaderValue, REFERER};
use reqwest::Client;
use std::time::Instant;
use utils::{request_error, validate_response};

use crate::error::FetchError;

/// Clients are reused per (profile, timeout) so batch crawls share pools.
static CLIENT_CACHE: Lazy<DashMap<(FetchProfile, u64), Client>> = Lazy::new(DashMap::new);

/// Fetch a page with the default options (desktop Chrome, 30s timeout).
///
/// # Examples
/// ```no_run
/// use menucrawl::tools::fetch::fetch;
///
/// # async fn example() -> Result<(), menucrawl::FetchError> {
/// let result = fetch("https://food.grab.com/vn/en/restaurant/x").await?;
/// println!("{} bytes in {}ms", result.html.len(), result.duration_ms);
/// # Ok(())
/// # }
/// ```
pub async fn fetch(url: &str) -> Result<FetchResult, FetchError> {
    fetch_with(url, &FetchOptions::default()).await
}

/// Fetch a page with explicit options.
pub async fn fetch_with(url: &str, opts: &FetchOptions) -> Result<FetchResult, FetchError> {
    let client = get_or_build_client(opts)?;
    let start = Instant::now();

    let mut headers = headers_for_profile(opts.profile);
    if let Some(referer) = opts.referer.as_deref() {
        if let Ok(value) = HeaderValue::from_str(referer) {
            headers.insert(REFERER, value);
        }
    }

    let response = client
        .get(url)
        .headers(headers)
        .send()
        .await
        .map_err(|e| request_error(e, opts.timeout_ms))?;

    let status = response.status();
    let final_url = response.url().to_string();
    let html = response
        .text()
        .await
        .map_err(|e| request_error(e, opts.timeout_ms))?;

    validate_response(status, &html)?;

    let duration_ms = start.elapsed().as_millis() as u64;
    tracing::debug!(url, status = status.as_u16(), bytes = html.len(), duration_ms, "fetched");

    Ok(FetchResult {
        html,
        status: status.as_u16(),
        final_url,
        profile_used: opts.profile,
        duration_ms,
    })
}

/// Fetch a page and return only the HTML.
pub async fn fetch_html(url: &str) -> Result<String, FetchError> {
    fetch(url).await.map(FetchResult::into_html)
}

fn get_or_build_client(opts: &FetchOptions) -> Result<Client, FetchError> {
    let key = (opts.profile, opts.timeout_ms);
    if let Some(client) = CLIENT_CACHE.get(&key) {
        return Ok(client.clone());
    }
    let client = build_client(opts)?;
    CLIENT_CACHE.insert(key, client.clone());
    Ok(client)
}
