use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tools::extract::ExtractionResult;
use crate::tools::fetch::FetchProfile;

/// Default number of pages crawled at once.
pub const DEFAULT_CONCURRENCY: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CrawlOptions {
    /// Host suffixes a restaurant link must belong to. Empty allows any host.
    pub allowed_hosts: Vec<String>,
    /// Upper bound on pages fetched and extracted at the same time.
    pub concurrency: usize,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            allowed_hosts: vec!["grab.com".into()],
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

/// One crawled restaurant page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlReport {
    pub url: String,
    pub fetched_at: DateTime<Utc>,
    pub fetch_ms: u64,
    pub profile_used: FetchProfile,
    #[serde(flatten)]
    pub result: ExtractionResult,
}
