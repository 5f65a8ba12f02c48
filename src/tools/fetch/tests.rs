#[cfg(test)]
mod tests {
    use crate::error::FetchError;
    use crate::tools::fetch::headers::headers_for_profile;
    use crate::tools::fetch::utils::validate_response;
    use crate::tools::fetch::{FetchOptions, FetchProfile, DEFAULT_TIMEOUT_MS};
    use reqwest::StatusCode;

    fn header<'a>(map: &'a reqwest::header::HeaderMap, name: &str) -> Option<&'a str> {
        map.get(name).and_then(|v| v.to_str().ok())
    }

    #[test]
    fn test_default_options() {
        let opts = FetchOptions::default();
        assert_eq!(opts.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert_eq!(opts.profile, FetchProfile::Windows);
        assert_eq!(opts.referer, None);
    }

    #[test]
    fn test_windows_is_browser_like() {
        let headers = headers_for_profile(FetchProfile::Windows);
        assert!(header(&headers, "user-agent").unwrap().contains("Chrome/"));
        assert!(header(&headers, "accept").unwrap().starts_with("text/html"));
        assert!(headers.contains_key("accept-language"));
        assert!(headers.contains_key("accept-encoding"));
        assert_eq!(header(&headers, "dnt"), Some("1"));
        assert_eq!(header(&headers, "sec-fetch-mode"), Some("navigate"));
        assert_eq!(header(&headers, "sec-ch-ua-mobile"), Some("?0"));
    }

    #[test]
    fn test_android_is_mobile() {
        let headers = headers_for_profile(FetchProfile::Android);
        assert_eq!(header(&headers, "sec-ch-ua-mobile"), Some("?1"));
        assert!(header(&headers, "user-agent").unwrap().contains("Mobile"));
    }

    #[test]
    fn test_minimal_is_small() {
        let headers = headers_for_profile(FetchProfile::Minimal);
        assert!(headers.contains_key("user-agent"));
        assert!(headers.len() <= 3);
    }

    #[test]
    fn test_non_success_status() {
        let err = validate_response(StatusCode::FORBIDDEN, "<html></html>").unwrap_err();
        assert!(matches!(err, FetchError::Status { code: 403, .. }));
        assert_eq!(err.to_string(), "status 403 (forbidden)");

        let err = validate_response(StatusCode::BAD_GATEWAY, "").unwrap_err();
        assert!(matches!(err, FetchError::Status { code: 502, reason: "server error" }));
    }

    #[test]
    fn test_challenge_page_is_blocked() {
        let body = "<html><body><div id=\"px-captcha\"></div>Please verify you are a human</body></html>";
        let err = validate_response(StatusCode::OK, body).unwrap_err();
        assert!(matches!(err, FetchError::Blocked { .. }));
    }

    #[test]
    fn test_regular_page_passes() {
        let body = "<html><body><h1>Phở Thìn</h1></body></html>";
        assert!(validate_response(StatusCode::OK, body).is_ok());
    }

    #[test]
    fn test_profile_serde_names() {
        let json = serde_json::to_string(&FetchProfile::MacOS).unwrap();
        assert_eq!(json, "\"macos\"");
        let back: FetchProfile = serde_json::from_str("\"android\"").unwrap();
        assert_eq!(back, FetchProfile::Android);
    }
}
