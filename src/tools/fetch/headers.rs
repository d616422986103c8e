use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};

/// Desktop Chrome headers sent with every request (without User-Agent).
const BROWSER_HEADERS: [(&str, &str); 7] = [
    ("accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8"),
    ("accept-language", "en-GB,en;q=0.9"),
    ("connection", "keep-alive"),
    ("upgrade-insecure-requests", "1"),
    ("sec-fetch-dest", "document"),
    ("sec-fetch-mode", "navigate"),
    ("sec-fetch-site", "none"),
];

/// Build the default header map, including User-Agent.
pub(crate) fn default_headers(user_agent: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();

    for (k, v) in BROWSER_HEADERS {
        headers.insert(HeaderName::from_static(k), HeaderValue::from_static(v));
    }

    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(user_agent).unwrap_or(HeaderValue::from_static("Mozilla/5.0")),
    );

    headers
}
