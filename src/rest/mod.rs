//! Resource layer for the YNAB REST API.
//!
//! This module turns typed calls into requests on a [`Transport`](crate::clients::Transport)
//! and decodes the enveloped responses:
//!
//! - **[`Resource`] traits**: per-family JSON keys and write capabilities
//! - **[`ResourceService`]**: generic `list`, `get`, `create`, `update`, `delete`
//! - **[`Filter`]**: delta-sync query (`last_knowledge_of_server`)
//! - **[`SearchResultSnapshot`]**: list result with the server knowledge to resume from
//! - **[`ResourceError`]**: payload serialization failures plus transport errors
//!
//! # Delta sync
//!
//! ```rust,ignore
//! use ynab_api::rest::Filter;
//!
//! let accounts = client.accounts();
//! let full = accounts.list("last-used", None).await?;
//! let mut knowledge = full.server_knowledge;
//!
//! // later: only what changed
//! let delta = accounts.list("last-used", Some(&Filter::since(knowledge))).await?;
//! knowledge = delta.server_knowledge;
//! for account in delta.iter() {
//!     if account.deleted {
//!         println!("removed {}", account.id);
//!     }
//! }
//! ```

pub mod envelope;
mod errors;
mod filter;
mod path;
mod resource;
mod service;
mod snapshot;

pub mod resources;

pub use errors::ResourceError;
pub use filter::Filter;
pub use path::{collection_path, member_path};
pub use resource::{Creatable, Deletable, Resource, Updatable};
pub use service::ResourceService;
pub use snapshot::SearchResultSnapshot;
