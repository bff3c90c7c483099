//! HTTP client for YNAB API communication.
//!
//! This module provides [`HttpClient`], the `reqwest`-backed [`Transport`].

use std::collections::HashMap;
use std::fmt;

use serde::de::DeserializeOwned;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::Transport;
use crate::config::{BaseUrl, YnabConfig};
use crate::error::ConfigError;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the YNAB API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers including `User-Agent` and the bearer token
/// - Mapping non-2xx responses to [`HttpError`]
/// - `X-Rate-Limit` header parsing
///
/// It performs exactly one attempt per request; there is no retry or backoff.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use ynab_api::{AccessToken, YnabConfig};
/// use ynab_api::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let config = YnabConfig::builder()
///     .access_token(AccessToken::new("token")?)
///     .build()?;
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/budgets").build()?;
/// let response = client.request(request).await?;
/// ```
pub struct HttpClient {
    client: reqwest::Client,
    base_url: BaseUrl,
    default_headers: HashMap<String, String>,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

// Headers are printed with the bearer token masked.
impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: HashMap<&str, &str> = self
            .default_headers
            .iter()
            .map(|(key, value)| {
                if key.eq_ignore_ascii_case("Authorization") {
                    (key.as_str(), "Bearer *****")
                } else {
                    (key.as_str(), value.as_str())
                }
            })
            .collect();

        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("default_headers", &headers)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the underlying reqwest
    /// client cannot be created (e.g. TLS initialization failure).
    pub fn new(config: &YnabConfig) -> Result<Self, ConfigError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}ynab-api-rust v{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.access_token().as_ref()),
        );

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ConfigError::HttpClientBuild {
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            default_headers,
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the YNAB API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs (`Network`)
    /// - The API rejects the payload (`Validation`)
    /// - Any other non-2xx response is received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}", self.base_url, request.path);
        tracing::debug!(method = %request.http_method, path = %request.path, "sending YNAB API request");

        let mut req_builder = self.client.request(to_reqwest_method(request.http_method), &url);

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                req_builder = req_builder.header(key, value);
            }
        }
        if let Some(body) = request.body {
            req_builder = req_builder
                .header("Content-Type", "application/json")
                .body(body);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;
        let response = HttpResponse::new(code, headers, body);

        if let Some(limit) = response.rate_limit {
            tracing::debug!(
                used = limit.used,
                limit = limit.limit,
                "YNAB API rate limit usage"
            );
        }

        if response.is_ok() {
            return Ok(response);
        }

        let error = HttpError::from_status(code, &response.body);
        match error.detail() {
            Some(detail) => tracing::warn!(
                status = code,
                error_id = %detail.id,
                error_name = %detail.name,
                "YNAB API request to {} failed",
                request.path
            ),
            None => tracing::warn!(status = code, "YNAB API request to {} failed", request.path),
        }
        Err(error)
    }

    /// Parses response headers into a `HashMap` keyed by lowercase name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl Transport for HttpClient {
    async fn send<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<T, HttpError> {
        let request = HttpRequest::builder(method, path).maybe_body(body).build()?;
        let response = self.request(request).await?;

        serde_json::from_str(&response.body).map_err(|source| HttpError::Deserialization {
            path: path.to_string(),
            source,
        })
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}
