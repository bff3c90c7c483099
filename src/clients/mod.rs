//! HTTP client types for YNAB API communication.
//!
//! This module provides the transport layer resource services are built on.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`YnabClient`]: Entry point handing out resource services
//! - [`Transport`]: The request/decode capability resource services depend on
//! - [`HttpClient`]: The `reqwest`-backed transport
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API, with [`RateLimit`] usage
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, PATCH, DELETE)
//! - [`HttpError`]: Transport-level errors
//!
//! # Example
//!
//! ```rust,ignore
//! use ynab_api::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/user").build()?;
//! let response = client.request(request).await?;
//! println!("{}", response.body);
//! ```
//!
//! # Status Mapping
//!
//! - **2xx**: success; the body is decoded by [`Transport::send`]
//! - **400, 422**: [`HttpError::Validation`]
//! - **Other non-2xx**: [`HttpError::Response`]
//!
//! Requests are attempted once. Rate limiting is reported through
//! [`HttpResponse::rate_limit`] but never waited on.

mod client;
mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use client::YnabClient;
pub use errors::{
    ApiErrorDetail, HttpError, HttpResponseError, InvalidHttpRequestError, ValidationError,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RateLimit};
pub use transport::Transport;
