use crate::error::FetchError;
use reqwest::StatusCode;

/// Markers of anti-bot interstitials served with a 2xx status.
const CHALLENGE_PATTERNS: [&str; 8] = [
    "verify you are a human",
    "please complete the captcha",
    "captcha challenge",
    "cf-browser-verification",
    "cf-captcha-container",
    "px-captcha",
    "blocked by cloudflare",
    "please enable javascript and cookies",
];

fn status_reason(status: StatusCode) -> &'static str {
    match status.as_u16() {
        429 => "rate limited",
        403 => "forbidden",
        404 => "not found",
        401 => "unauthorized",
        400 => "bad request",
        500..=599 => "server error",
        _ => "unexpected status",
    }
}

/// Validate an HTTP response before handing its body to the extractor.
///
/// Non-success statuses and known challenge pages are failures; everything
/// else, however thin, is left for the extractor to judge.
pub(super) fn validate_response(status: StatusCode, body: &str) -> Result<(), FetchError> {
    if !status.is_success() {
        return Err(FetchError::Status {
            code: status.as_u16(),
            reason: status_reason(status),
        });
    }

    let lower = body.to_lowercase();
    if let Some(pattern) = CHALLENGE_PATTERNS.iter().copied().find(|p| lower.contains(p)) {
        return Err(FetchError::Blocked { pattern });
    }

    Ok(())
}

/// Map a transport error, singling out timeouts.
pub(super) fn request_error(e: reqwest::Error, timeout_ms: u64) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout { ms: timeout_ms }
    } else {
        FetchError::Request(e)
    }
}
