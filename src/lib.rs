//! # YNAB API Rust SDK
//!
//! A typed Rust client for the YNAB ("You Need A Budget") REST API. Callers
//! read and change budget resources without building HTTP requests or parsing
//! raw JSON.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`YnabConfig`] and [`YnabConfigBuilder`]
//! - Validated newtypes for the access token and base URL
//! - A [`Transport`](clients::Transport) abstraction with a `reqwest`-backed
//!   [`HttpClient`](clients::HttpClient)
//! - One generic [`ResourceService`](rest::ResourceService) handling the
//!   envelope convention for every resource
//! - Delta sync through [`Filter`](rest::Filter) and
//!   [`SearchResultSnapshot`](rest::SearchResultSnapshot)
//!
//! ## Quick Start
//!
//! ```rust
//! use ynab_api::{AccessToken, YnabConfig};
//!
//! let config = YnabConfig::builder()
//!     .access_token(AccessToken::new("personal-access-token").unwrap())
//!     .build()
//!     .unwrap();
//! assert_eq!(config.base_url().as_ref(), "https://api.ynab.com/v1");
//! ```
//!
//! ## Reading and Writing Resources
//!
//! ```rust,ignore
//! use ynab_api::{YnabClient, YnabConfig, AccessToken};
//! use ynab_api::rest::resources::{AccountType, PayloadAccount};
//!
//! let client = YnabClient::new(&config)?;
//!
//! let snapshot = client.accounts().list("last-used", None).await?;
//! if let Some(account) = client.accounts().get("last-used", "A1").await? {
//!     println!("{}", account.name);
//! }
//!
//! let created = client
//!     .accounts()
//!     .create("last-used", &PayloadAccount::new("Savings", AccountType::Savings, 1000))
//!     .await?;
//!
//! // Later, fetch only what changed
//! let delta = client
//!     .accounts()
//!     .list("last-used", Some(&snapshot.next_filter()))
//!     .await?;
//! ```
//!
//! ## Logging
//!
//! Requests, rate-limit usage and failed responses are reported through
//! [`tracing`](https://docs.rs/tracing). The SDK never installs a subscriber.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: Clients and services are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Single attempt**: No retries; errors are returned as the transport saw them

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, BaseUrl, YnabConfig, YnabConfigBuilder};
pub use error::ConfigError;

pub use clients::{HttpClient, HttpError, HttpMethod, Transport, YnabClient};

pub use rest::{
    Filter, Resource, ResourceError, ResourceService, SearchResultSnapshot,
};
