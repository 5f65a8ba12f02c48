use serde::{Deserialize, Serialize};

pub use super::profile::FetchProfile;

/// Reference fetch timeout for a full restaurant page.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// How a page is requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FetchOptions {
    /// Browser the request pretends to be.
    pub profile: FetchProfile,
    /// Whole-request timeout; the document is fetched as a single unit.
    pub timeout_ms: u64,
    /// Optional `Referer` header.
    pub referer: Option<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            profile: FetchProfile::default(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            referer: None,
        }
    }
}

/// Result of a fetch operation including telemetry metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchResult {
    /// The fetched HTML content
    pub html: String,
    /// HTTP status code of the final response
    pub status: u16,
    /// URL after redirects
    pub final_url: String,
    /// The profile whose headers were sent
    pub profile_used: FetchProfile,
    /// Total duration in milliseconds
    pub duration_ms: u64,
}

impl FetchResult {
    /// Consume the result and return just the HTML.
    pub fn into_html(self) -> String {
        self.html
    }
}
