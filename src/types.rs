use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::tools::crawl::CrawlOptions;
use crate::tools::extract::ExtractOptions;
use crate::tools::fetch::FetchOptions;

/// Handy wrapper when you want to load or pass "config" as a single object.
///
/// Every section is optional in the JSON file; missing keys fall back to the
/// defaults of the section type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub fetch: FetchOptions,
    pub extract: ExtractOptions,
    pub crawl: CrawlOptions,
}

impl Config {
    /// Load a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}
impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }
    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

impl<T> From<Result<T>> for ApiResponse<T> {
    fn from(res: Result<T>) -> Self {
        match res {
            Ok(v) => ApiResponse::ok(v),
            Err(e) => ApiResponse::err(e.to_string()),
        }
    }
}
