//! HTTP-specific error types for the YNAB API client.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`ValidationError`]: The API rejected the request payload (400/422)
//! - [`InvalidHttpRequestError`]: A request failed local checks before sending
//! - [`HttpError`]: Unified error type returned by every [`Transport`](crate::clients::Transport)
//!
//! # Example
//!
//! ```rust,ignore
//! use ynab_api::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Validation(e)) => println!("Rejected: {}", e),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::Deserialization { path, source }) => println!("{path}: {source}"),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {}", e),
//!     Err(HttpError::Network(e)) => println!("Network error: {}", e),
//! }
//! ```

use serde::Deserialize;
use thiserror::Error;

/// Error detail from a YNAB error body.
///
/// YNAB reports failures as
/// `{"error": {"id": "404.2", "name": "resource_not_found", "detail": "..."}}`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ApiErrorDetail {
    /// Error id, usually the status code with an optional sub-code.
    pub id: String,
    /// Machine-readable error name (e.g. `bad_request`).
    pub name: String,
    /// Human-readable description.
    #[serde(default)]
    pub detail: String,
}

impl ApiErrorDetail {
    /// Parses the detail out of a raw response body.
    ///
    /// Returns `None` when the body is not a YNAB error document.
    #[must_use]
    pub fn from_body(body: &str) -> Option<Self> {
        #[derive(Deserialize)]
        struct ErrorBody {
            error: ApiErrorDetail,
        }

        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .map(|parsed| parsed.error)
    }
}

/// Builds the message carried by status errors: the YNAB detail when present,
/// otherwise the raw body, otherwise the status code.
fn error_message(code: u16, body: &str, detail: Option<&ApiErrorDetail>) -> String {
    match detail {
        Some(detail) if !detail.detail.is_empty() => {
            format!("{} ({}): {}", detail.name, detail.id, detail.detail)
        }
        Some(detail) => format!("{} ({})", detail.name, detail.id),
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => format!("HTTP status {code}"),
    }
}

/// Error returned when a request receives a non-successful response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Readable error message.
    pub message: String,
    /// Parsed YNAB error detail, when the body carried one.
    pub detail: Option<ApiErrorDetail>,
}

impl HttpResponseError {
    /// Creates the error from a status code and raw body.
    #[must_use]
    pub fn from_body(code: u16, body: &str) -> Self {
        let detail = ApiErrorDetail::from_body(body);
        Self {
            code,
            message: error_message(code, body, detail.as_ref()),
            detail,
        }
    }
}

/// Error returned when the API rejects a payload.
///
/// YNAB answers invalid create/update payloads (for example an unknown
/// account type) with `400 bad_request`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Validation failed: {message}")]
pub struct ValidationError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Readable error message.
    pub message: String,
    /// Parsed YNAB error detail, when the body carried one.
    pub detail: Option<ApiErrorDetail>,
}

impl ValidationError {
    /// Creates the error from a status code and raw body.
    #[must_use]
    pub fn from_body(code: u16, body: &str) -> Self {
        let detail = ApiErrorDetail::from_body(body);
        Self {
            code,
            message: error_message(code, body, detail.as_ref()),
            detail,
        }
    }
}

/// Error returned when a request fails local checks before being sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST, PUT or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request path does not start with `/`.
    #[error("Request path '{path}' must start with '/'.")]
    RelativePath {
        /// The offending path.
        path: String,
    },
}

/// Unified error type for all transport-level failures.
///
/// Resource services return these unchanged inside
/// [`ResourceError::Http`](crate::rest::ResourceError::Http).
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response other than a validation failure.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The API rejected the request payload.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A 2xx response whose body did not match the expected shape.
    #[error("Failed to decode response from {path}: {source}")]
    Deserialization {
        /// The request path.
        path: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Maps a non-2xx status and body to the matching variant.
    #[must_use]
    pub fn from_status(code: u16, body: &str) -> Self {
        match code {
            400 | 422 => Self::Validation(ValidationError::from_body(code, body)),
            _ => Self::Response(HttpResponseError::from_body(code, body)),
        }
    }

    /// Returns the HTTP status code, if the error came from a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::Validation(e) => Some(e.code),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            Self::Deserialization { .. } | Self::InvalidRequest(_) => None,
        }
    }

    /// Returns the parsed YNAB error detail, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&ApiErrorDetail> {
        match self {
            Self::Response(e) => e.detail.as_ref(),
            Self::Validation(e) => e.detail.as_ref(),
            _ => None,
        }
    }
}
