//! Error type for resource service operations.
//!
//! Resource services add exactly one failure of their own, payload
//! serialization, which happens before any request is sent. Everything else
//! is the transport's [`HttpError`], passed through untouched.
//!
//! # Example
//!
//! ```rust,ignore
//! use ynab_api::clients::HttpError;
//! use ynab_api::rest::ResourceError;
//!
//! match client.accounts().create("last-used", &payload).await {
//!     Ok(account) => println!("Created {}", account.id),
//!     Err(e) if e.is_validation() => println!("Rejected: {e}"),
//!     Err(ResourceError::Http(HttpError::Network(e))) => println!("Offline: {e}"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::HttpError;

/// Error type for resource service operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The outgoing payload could not be encoded. No request was sent.
    #[error("Failed to serialize {resource} payload: {source}")]
    Serialization {
        /// Singular name of the resource (e.g. "account").
        resource: &'static str,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A transport-level error, exactly as the transport returned it.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Returns the HTTP status code, if the error came from a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            Self::Serialization { .. } => None,
        }
    }

    /// Returns `true` if the server rejected the payload.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Http(HttpError::Validation(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpResponseError, ValidationError};

    #[test]
    fn test_http_error_passes_through_transparently() {
        let http_error = HttpError::Response(HttpResponseError::from_body(
            404,
            r#"{"error":{"id":"404.2","name":"resource_not_found","detail":"Resource not found"}}"#,
        ));
        let expected = http_error.to_string();

        let error: ResourceError = http_error.into();
        assert_eq!(error.to_string(), expected);
        assert_eq!(error.status(), Some(404));
        assert!(!error.is_validation());
    }

    #[test]
    fn test_validation_detection() {
        let error = ResourceError::Http(HttpError::Validation(ValidationError::from_body(
            400,
            r#"{"error":{"id":"400","name":"bad_request","detail":"Bad Request"}}"#,
        )));
        assert!(error.is_validation());
        assert_eq!(error.status(), Some(400));
    }

    #[test]
    fn test_serialization_error_message() {
        let source = serde_json::from_str::<u8>("x").unwrap_err();
        let error = ResourceError::Serialization {
            resource: "account",
            source,
        };

        assert!(error.to_string().contains("account payload"));
        assert!(error.status().is_none());
        assert!(std::error::Error::source(&error).is_some());
    }
}
