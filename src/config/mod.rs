//! Configuration types for the YNAB API client.
//!
//! # Overview
//!
//! - [`YnabConfig`]: Settings shared by every request
//! - [`YnabConfigBuilder`]: A builder for constructing [`YnabConfig`] instances
//! - [`AccessToken`]: A validated bearer token with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//!
//! # Example
//!
//! ```rust
//! use ynab_api::{AccessToken, YnabConfig};
//!
//! let config = YnabConfig::builder()
//!     .access_token(AccessToken::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.ynab.com/v1");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, BaseUrl, DEFAULT_BASE_URL};

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for the YNAB API client.
///
/// `YnabConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct YnabConfig {
    access_token: AccessToken,
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl YnabConfig {
    /// Creates a new builder for constructing a `YnabConfig`.
    #[must_use]
    pub fn builder() -> YnabConfigBuilder {
        YnabConfigBuilder::new()
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<YnabConfig>();
};

/// Builder for constructing [`YnabConfig`] instances.
///
/// `access_token` is required.
///
/// # Defaults
///
/// - `base_url`: [`DEFAULT_BASE_URL`]
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (reqwest's default, no timeout)
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use ynab_api::{AccessToken, BaseUrl, YnabConfig};
///
/// let config = YnabConfig::builder()
///     .access_token(AccessToken::new("token").unwrap())
///     .base_url(BaseUrl::new("http://localhost:3000/v1").unwrap())
///     .user_agent_prefix("BudgetSync/2.1")
///     .timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct YnabConfigBuilder {
    access_token: Option<AccessToken>,
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl YnabConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the per-request timeout applied by the HTTP client.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`YnabConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `access_token` is not set.
    pub fn build(self) -> Result<YnabConfig, ConfigError> {
        let access_token = self.access_token.ok_or(ConfigError::MissingRequiredField {
            field: "access_token",
        })?;

        Ok(YnabConfig {
            access_token,
            base_url: self.base_url.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}
