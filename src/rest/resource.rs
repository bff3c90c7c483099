//! Resource traits describing a budget resource family.
//!
//! A type implementing [`Resource`] names the JSON keys its envelopes use.
//! Capability traits opt a resource into write operations on
//! [`ResourceService`](crate::rest::ResourceService):
//!
//! - [`Creatable`]: `create()` with a write-only payload type
//! - [`Updatable`]: `update()` with a payload type and HTTP verb
//! - [`Deletable`]: `delete()`
//!
//! A resource implementing none of them is read-only.
//!
//! # Example
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use ynab_api::rest::{Creatable, Resource};
//!
//! #[derive(Debug, Clone, Deserialize)]
//! pub struct Category {
//!     pub id: String,
//!     pub name: String,
//!     #[serde(default)]
//!     pub deleted: bool,
//! }
//!
//! #[derive(Debug, Clone, Serialize)]
//! pub struct PayloadCategory {
//!     pub name: String,
//! }
//!
//! impl Resource for Category {
//!     const NAME: &'static str = "category";
//!     const PLURAL: &'static str = "categories";
//!
//!     fn id(&self) -> &str {
//!         &self.id
//!     }
//!
//!     fn is_deleted(&self) -> bool {
//!         self.deleted
//!     }
//! }
//!
//! impl Creatable for Category {
//!     type CreatePayload = PayloadCategory;
//! }
//! ```

use serde::{de::DeserializeOwned, Serialize};

use crate::clients::HttpMethod;

/// A budget-scoped resource family.
pub trait Resource: DeserializeOwned {
    /// Singular JSON key (e.g. `account`), used for single-entity envelopes
    /// in both directions.
    const NAME: &'static str;

    /// Plural JSON key and URL segment (e.g. `accounts`).
    const PLURAL: &'static str;

    /// Returns the server-assigned id.
    fn id(&self) -> &str;

    /// Returns `true` if the server reports this entity as deleted.
    ///
    /// Delta responses carry deletions as entities with a deleted flag.
    fn is_deleted(&self) -> bool {
        false
    }
}

/// A resource that can be created with a write-only payload.
pub trait Creatable: Resource {
    /// Fields accepted on creation.
    type CreatePayload: Serialize;
}

/// A resource that can be updated in place.
pub trait Updatable: Resource {
    /// Fields accepted on update.
    type UpdatePayload: Serialize;

    /// Verb the API expects for updates (`PUT` or `PATCH`).
    const UPDATE_METHOD: HttpMethod;
}

/// A resource that can be deleted; the API echoes the deleted entity.
pub trait Deletable: Resource {}
