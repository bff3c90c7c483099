//! Generic service implementing the operations shared by every resource.
//!
//! [`ResourceService<T, R>`] combines a [`Transport`] with a [`Resource`]
//! description. It builds paths, applies the [`Filter`], wraps payloads and
//! unwraps envelopes; the transport does the rest. Failures from the
//! transport are returned unchanged; there is no retry, caching or
//! cross-call state.
//!
//! # Example
//!
//! ```rust,ignore
//! use ynab_api::rest::{Filter, ResourceService};
//! use ynab_api::rest::resources::{Account, AccountType, PayloadAccount};
//!
//! let accounts: ResourceService<_, Account> = ResourceService::new(&http_client);
//!
//! let snapshot = accounts.list("last-used", Some(&Filter::since(42))).await?;
//! let maybe = accounts.get("last-used", "A1").await?;
//! let created = accounts
//!     .create(
//!         "last-used",
//!         &PayloadAccount::new("Savings", AccountType::Savings, 1000),
//!     )
//!     .await?;
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::clients::Transport;
use crate::rest::envelope::{DataEnvelope, EntityData, ListData, OptionalEntityData, PayloadEnvelope};
use crate::rest::path::{collection_path, member_path, with_query};
use crate::rest::{
    Creatable, Deletable, Filter, Resource, ResourceError, SearchResultSnapshot, Updatable,
};

/// Operations on one resource family, over an injected transport.
///
/// `T` is usually `&HttpClient` (see [`YnabClient`](crate::clients::YnabClient))
/// but any [`Transport`] works.
pub struct ResourceService<T, R> {
    transport: T,
    resource: PhantomData<fn() -> R>,
}

impl<T, R> ResourceService<T, R> {
    /// Creates a service over `transport`.
    #[must_use]
    pub const fn new(transport: T) -> Self {
        Self {
            transport,
            resource: PhantomData,
        }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: Clone, R> Clone for ResourceService<T, R> {
    fn clone(&self) -> Self {
        Self::new(self.transport.clone())
    }
}

impl<T: fmt::Debug, R: Resource> fmt::Debug for ResourceService<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceService")
            .field("resource", &R::PLURAL)
            .field("transport", &self.transport)
            .finish()
    }
}

impl<T: Transport, R: Resource> ResourceService<T, R> {
    /// Lists the resources of a budget.
    ///
    /// Requests `/budgets/{budget_id}/{plural}`, with `?{filter}` appended
    /// only when `filter` is present and non-empty. With
    /// [`Filter::since`], the snapshot holds only entities changed since that
    /// server knowledge, deletions included.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] with the transport's error unchanged.
    pub async fn list(
        &self,
        budget_id: &str,
        filter: Option<&Filter>,
    ) -> Result<SearchResultSnapshot<R>, ResourceError> {
        let query = filter.map(Filter::to_query).unwrap_or_default();
        let path = with_query(collection_path(budget_id, R::PLURAL), &query);

        let response: DataEnvelope<ListData<R>> = self.transport.get(&path).await?;
        let ListData {
            entities,
            server_knowledge,
        } = response.data;

        tracing::debug!(
            resource = R::PLURAL,
            count = entities.len(),
            server_knowledge,
            "listed resources"
        );
        Ok(SearchResultSnapshot::new(entities, server_knowledge))
    }

    /// Fetches a single resource by id.
    ///
    /// Returns `Ok(None)` when a successful response carries a `null` or
    /// missing entity. The API can answer that way instead of with a 404;
    /// a real 404 still surfaces as an error.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] with the transport's error unchanged.
    pub async fn get(&self, budget_id: &str, id: &str) -> Result<Option<R>, ResourceError> {
        let path = member_path(budget_id, R::PLURAL, id);
        let response: DataEnvelope<OptionalEntityData<R>> = self.transport.get(&path).await?;
        Ok(response.data.entity)
    }
}

impl<T: Transport, R: Creatable> ResourceService<T, R> {
    /// Creates a resource from a write-only payload.
    ///
    /// Sends `{"<singular>": payload}` to `/budgets/{budget_id}/{plural}/`.
    /// The payload is encoded before anything is sent; field validation is
    /// left to the server.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the payload cannot be
    /// encoded, or [`ResourceError::Http`] with the transport's error,
    /// including [`HttpError::Validation`](crate::clients::HttpError::Validation)
    /// when the server rejects the payload.
    pub async fn create(
        &self,
        budget_id: &str,
        payload: &R::CreatePayload,
    ) -> Result<R, ResourceError> {
        let body = encode_payload::<R, _>(payload)?;
        let path = format!("{}/", collection_path(budget_id, R::PLURAL));

        let response: DataEnvelope<EntityData<R>> = self.transport.post(&path, body).await?;
        Ok(response.data.entity)
    }
}

impl<T: Transport, R: Updatable> ResourceService<T, R> {
    /// Updates a resource with [`Updatable::UPDATE_METHOD`].
    ///
    /// Sends `{"<singular>": payload}` to `/budgets/{budget_id}/{plural}/{id}`.
    ///
    /// # Errors
    ///
    /// Same as [`ResourceService::create`].
    pub async fn update(
        &self,
        budget_id: &str,
        id: &str,
        payload: &R::UpdatePayload,
    ) -> Result<R, ResourceError> {
        let body = encode_payload::<R, _>(payload)?;
        let path = member_path(budget_id, R::PLURAL, id);

        let response: DataEnvelope<EntityData<R>> = self
            .transport
            .send(R::UPDATE_METHOD, &path, Some(body))
            .await?;
        Ok(response.data.entity)
    }
}

impl<T: Transport, R: Deletable> ResourceService<T, R> {
    /// Deletes a resource and returns it as the server last saw it.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] with the transport's error unchanged.
    pub async fn delete(&self, budget_id: &str, id: &str) -> Result<R, ResourceError> {
        let path = member_path(budget_id, R::PLURAL, id);
        let response: DataEnvelope<EntityData<R>> = self.transport.delete(&path).await?;
        Ok(response.data.entity)
    }
}

fn encode_payload<R: Resource, P: serde::Serialize>(payload: &P) -> Result<Vec<u8>, ResourceError> {
    PayloadEnvelope::new::<R>(payload)
        .to_vec()
        .map_err(|source| ResourceError::Serialization {
            resource: R::NAME,
            source,
        })
}
