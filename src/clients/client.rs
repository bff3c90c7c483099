//! Entry point for budget resource access.
//!
//! [`YnabClient`] owns one [`HttpClient`] and hands out resource services that
//! borrow it.

use crate::clients::HttpClient;
use crate::config::YnabConfig;
use crate::error::ConfigError;
use crate::rest::resources::{AccountService, PayeeService, TransactionService};
use crate::rest::ResourceService;

/// Client for the YNAB API.
///
/// Every service returned by this client shares the same underlying
/// connection pool. Services are cheap to create; create one per call site
/// if that reads better.
///
/// # Thread Safety
///
/// `YnabClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use ynab_api::{AccessToken, YnabClient, YnabConfig};
/// use ynab_api::rest::Filter;
///
/// let config = YnabConfig::builder()
///     .access_token(AccessToken::new("personal-access-token")?)
///     .build()?;
/// let client = YnabClient::new(&config)?;
///
/// let snapshot = client.accounts().list("last-used", None).await?;
/// let delta = client
///     .accounts()
///     .list("last-used", Some(&snapshot.next_filter()))
///     .await?;
/// ```
#[derive(Debug)]
pub struct YnabClient {
    http_client: HttpClient,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<YnabClient>();
};

impl YnabClient {
    /// Creates a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the HTTP client cannot be
    /// created.
    pub fn new(config: &YnabConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_http_client(HttpClient::new(config)?))
    }

    /// Wraps an existing HTTP client.
    #[must_use]
    pub const fn from_http_client(http_client: HttpClient) -> Self {
        Self { http_client }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Accounts service.
    #[must_use]
    pub const fn accounts(&self) -> AccountService<&HttpClient> {
        ResourceService::new(&self.http_client)
    }

    /// Payees service.
    #[must_use]
    pub const fn payees(&self) -> PayeeService<&HttpClient> {
        ResourceService::new(&self.http_client)
    }

    /// Transactions service.
    #[must_use]
    pub const fn transactions(&self) -> TransactionService<&HttpClient> {
        ResourceService::new(&self.http_client)
    }
}
