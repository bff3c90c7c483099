//! The transport capability resource services are built on.
//!
//! A [`Transport`] performs one authenticated request against the API and
//! decodes the JSON response into a caller-chosen type. Resource services
//! receive a transport at construction and never build their own, so tests
//! can substitute an in-memory implementation for [`HttpClient`].
//!
//! Only [`Transport::send`] is required; the verb helpers delegate to it.
//!
//! [`HttpClient`]: crate::clients::HttpClient

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::clients::{HttpError, HttpMethod};

/// An authenticated JSON request/response channel to the API.
///
/// Implementations must:
/// - decode a 2xx body into `T`, failing with [`HttpError::Deserialization`]
///   when it does not match,
/// - map non-2xx responses to [`HttpError::Validation`] or
///   [`HttpError::Response`],
/// - own retry, timeout and cancellation policy. Callers propagate whatever
///   error comes back without reinterpreting it.
///
/// Implementations used from several tasks at once must be safe for
/// concurrent use; [`HttpClient`](crate::clients::HttpClient) is.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Sends a request and decodes the response body into `T`.
    ///
    /// `path` is relative to the API base URL and may carry a query string.
    /// `body` is pre-serialized JSON.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure, non-2xx status or a body
    /// that does not decode into `T`.
    async fn send<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<T, HttpError>;

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// See [`Transport::send`].
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        self.send(HttpMethod::Get, path, None).await
    }

    /// Sends a POST request with a serialized body.
    ///
    /// # Errors
    ///
    /// See [`Transport::send`].
    async fn post<T: DeserializeOwned>(&self, path: &str, body: Vec<u8>) -> Result<T, HttpError> {
        self.send(HttpMethod::Post, path, Some(body)).await
    }

    /// Sends a PUT request with a serialized body.
    ///
    /// # Errors
    ///
    /// See [`Transport::send`].
    async fn put<T: DeserializeOwned>(&self, path: &str, body: Vec<u8>) -> Result<T, HttpError> {
        self.send(HttpMethod::Put, path, Some(body)).await
    }

    /// Sends a PATCH request with a serialized body.
    ///
    /// # Errors
    ///
    /// See [`Transport::send`].
    async fn patch<T: DeserializeOwned>(&self, path: &str, body: Vec<u8>) -> Result<T, HttpError> {
        self.send(HttpMethod::Patch, path, Some(body)).await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`Transport::send`].
    async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        self.send(HttpMethod::Delete, path, None).await
    }
}

impl<X: Transport> Transport for &X {
    async fn send<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<T, HttpError> {
        (**self).send(method, path, body).await
    }
}

impl<X: Transport> Transport for Arc<X> {
    async fn send<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<T, HttpError> {
        (**self).send(method, path, body).await
    }
}
