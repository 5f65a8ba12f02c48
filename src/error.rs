use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Markup that cannot be recovered as a document at all.
///
/// The HTML parser itself is lenient, so this only fires for input that is
/// not text in the first place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("input contains NUL bytes; not textual markup")]
    Binary,
    #[error("input is not valid UTF-8 (first bad byte at {offset})")]
    Encoding { offset: usize },
}

/// Failure reported by the fetch collaborator. Propagated unmodified.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build http client: {0}")]
    Client(String),
    #[error("request timed out after {ms}ms")]
    Timeout { ms: u64 },
    #[error("http request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("status {code} ({reason})")]
    Status { code: u16, reason: &'static str },
    #[error("blocked - {pattern}")]
    Blocked { pattern: &'static str },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("not a supported delivery link: {0}")]
    InvalidLink(String),
    #[error("extraction task failed: {0}")]
    Task(String),
    #[error("config error: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
