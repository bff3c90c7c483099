//! HTTP response types for the YNAB API client.

use std::collections::HashMap;

/// Rate limit usage parsed from the `X-Rate-Limit` header.
///
/// The header format is "X/Y" where X is the number of requests made in the
/// current rolling hour and Y is the hourly allowance.
///
/// # Example
///
/// ```rust
/// use ynab_api::clients::RateLimit;
///
/// let limit = RateLimit::parse("36/200").unwrap();
/// assert_eq!(limit.used, 36);
/// assert_eq!(limit.limit, 200);
/// assert_eq!(limit.remaining(), 164);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests made in the current window.
    pub used: u32,
    /// Requests allowed per window.
    pub limit: u32,
}

impl RateLimit {
    /// Parses the rate limit header value. Returns `None` on any other format.
    #[must_use]
    pub fn parse(header_value: &str) -> Option<Self> {
        let (used, limit) = header_value.trim().split_once('/')?;

        Some(Self {
            used: used.trim().parse().ok()?,
            limit: limit.trim().parse().ok()?,
        })
    }

    /// Requests left in the current window.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.limit.saturating_sub(self.used)
    }
}

/// An HTTP response from the YNAB API.
///
/// The body is kept as raw text; decoding into a typed shape happens in
/// [`Transport`](crate::clients::Transport) implementations so malformed
/// JSON can be reported against the request path.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
    /// Rate limit usage (from the `X-Rate-Limit` header).
    pub rate_limit: Option<RateLimit>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the `X-Rate-Limit` header.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        let rate_limit = headers
            .get("x-rate-limit")
            .and_then(|values| values.first())
            .and_then(|value| RateLimit::parse(value));

        Self {
            code,
            headers,
            body,
            rate_limit,
        }
    }

    /// Returns `true` if the status code is 2xx.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_parse_valid() {
        let limit = RateLimit::parse(" 199/200 ").unwrap();
        assert_eq!(limit.used, 199);
        assert_eq!(limit.limit, 200);
        assert_eq!(limit.remaining(), 1);
    }

    #[test]
    fn test_rate_limit_parse_invalid() {
        assert!(RateLimit::parse("").is_none());
        assert!(RateLimit::parse("200").is_none());
        assert!(RateLimit::parse("a/b").is_none());
        assert!(RateLimit::parse("1/2/3").is_none());
    }

    #[test]
    fn test_rate_limit_remaining_saturates() {
        let limit = RateLimit {
            used: 250,
            limit: 200,
        };
        assert_eq!(limit.remaining(), 0);
    }

    #[test]
    fn test_response_parses_rate_limit_header() {
        let mut headers = HashMap::new();
        headers.insert("x-rate-limit".to_string(), vec!["36/200".to_string()]);
        let response = HttpResponse::new(200, headers, "{}".to_string());

        assert!(response.is_ok());
        assert_eq!(response.rate_limit, Some(RateLimit { used: 36, limit: 200 }));
        assert_eq!(response.header("X-Rate-Limit"), Some("36/200"));
    }

    #[test]
    fn test_response_is_ok_boundaries() {
        let ok = |code| HttpResponse::new(code, HashMap::new(), String::new()).is_ok();
        assert!(ok(200));
        assert!(ok(201));
        assert!(ok(299));
        assert!(!ok(199));
        assert!(!ok(300));
        assert!(!ok(404));
    }
}
