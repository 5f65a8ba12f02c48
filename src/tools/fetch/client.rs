use super::types::FetchOptions;
use crate::error::FetchError;
use reqwest::{redirect, Client};
use std::time::Duration;

const REDIRECT_LIMIT: usize = 10;
const POOL_IDLE_TIMEOUT_SEC: u64 = 90;
const POOL_MAX_IDLE_PER_HOST: usize = 32;

/// Build a reqwest client for the given options.
///
/// Headers are attached per request, so only transport settings live here.
pub(crate) fn build_client(opts: &FetchOptions) -> Result<Client, FetchError> {
    Client::builder()
        .cookie_store(true)
        .redirect(redirect::Policy::limited(REDIRECT_LIMIT))
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .timeout(Duration::from_millis(opts.timeout_ms))
        .pool_idle_timeout(Duration::from_secs(POOL_IDLE_TIMEOUT_SEC))
        .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
        .build()
        .map_err(|e| FetchError::Client(e.to_string()))
}
