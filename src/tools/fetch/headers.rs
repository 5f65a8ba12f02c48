use super::profile::FetchProfile;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};

/// Build the complete header map for the given profile, including User-Agent.
pub(crate) fn headers_for_profile(profile: FetchProfile) -> HeaderMap {
    let mut headers = HeaderMap::new();

    for (k, v) in header_pairs_for_profile(profile) {
        let (Ok(name), Ok(val)) = (
            HeaderName::from_bytes(k.to_ascii_lowercase().as_bytes()),
            HeaderValue::from_str(v),
        ) else {
            continue;
        };
        headers.insert(name, val);
    }

    headers.insert(USER_AGENT, HeaderValue::from_static(user_agent_for_profile(profile)));
    headers
}

fn user_agent_for_profile(profile: FetchProfile) -> &'static str {
    match profile {
        FetchProfile::Minimal => "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36",
        FetchProfile::Windows => {
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36"
        }
        FetchProfile::MacOS => {
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.6 Safari/605.1.15"
        }
        FetchProfile::Android => {
            "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Mobile Safari/537.36"
        }
    }
}

/// Header pairs for the given profile (without User-Agent).
fn header_pairs_for_profile(profile: FetchProfile) -> Vec<(&'static str, &'static str)> {
    // Navigation headers every real browser sends on a top-level page load.
    let navigation = [
        ("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8"),
        ("Accept-Encoding", "gzip, deflate, br"),
        ("Connection", "keep-alive"),
        ("Upgrade-Insecure-Requests", "1"),
        ("Sec-Fetch-Dest", "document"),
        ("Sec-Fetch-Mode", "navigate"),
        ("Sec-Fetch-Site", "none"),
        ("Cache-Control", "max-age=0"),
    ];

    match profile {
        FetchProfile::Minimal => vec![("Accept", "*/*"), ("Accept-Encoding", "gzip, deflate")],
        FetchProfile::Windows => {
            let mut pairs = navigation.to_vec();
            pairs.extend([
                ("Accept-Language", "en-US,en;q=0.9,vi;q=0.8"),
                ("DNT", "1"),
                ("Sec-Fetch-User", "?1"),
                ("Sec-Ch-Ua", "\"Google Chrome\";v=\"131\", \"Chromium\";v=\"131\", \"Not_A Brand\";v=\"24\""),
                ("Sec-Ch-Ua-Mobile", "?0"),
                ("Sec-Ch-Ua-Platform", "\"Windows\""),
            ]);
            pairs
        }
        FetchProfile::MacOS => {
            let mut pairs = navigation.to_vec();
            pairs.extend([("Accept-Language", "en-US,en;q=0.9")]);
            pairs
        }
        FetchProfile::Android => {
            let mut pairs = navigation.to_vec();
            pairs.extend([
                ("Accept-Language", "vi-VN,vi;q=0.9,en-US;q=0.8,en;q=0.7"),
                ("Sec-Fetch-User", "?1"),
                ("Sec-Ch-Ua", "\"Google Chrome\";v=\"131\", \"Chromium\";v=\"131\", \"Not_A Brand\";v=\"24\""),
                ("Sec-Ch-Ua-Mobile", "?1"),
                ("Sec-Ch-Ua-Platform", "\"Android\""),
            ]);
            pairs
        }
    }
}
