//! Payee resource implementation.
//!
//! Payees are created implicitly by transactions. The API lets callers list,
//! fetch and rename them; renames use `PATCH`.

use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{Resource, ResourceService, Updatable};

/// A payee in a budget.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Payee {
    /// The unique identifier of the payee.
    pub id: String,

    /// The name of the payee.
    pub name: String,

    /// Set when this payee represents a transfer to another account.
    pub transfer_account_id: Option<String>,

    /// Whether the payee has been deleted.
    pub deleted: bool,
}

impl Payee {
    /// Returns `true` if this payee is the transfer payee of an account.
    #[must_use]
    pub const fn is_transfer(&self) -> bool {
        self.transfer_account_id.is_some()
    }
}

impl Resource for Payee {
    const NAME: &'static str = "payee";
    const PLURAL: &'static str = "payees";

    fn id(&self) -> &str {
        &self.id
    }

    fn is_deleted(&self) -> bool {
        self.deleted
    }
}

impl Updatable for Payee {
    type UpdatePayload = PayloadPayee;
    const UPDATE_METHOD: HttpMethod = HttpMethod::Patch;
}

/// Fields accepted when updating a payee.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PayloadPayee {
    /// The new name of the payee.
    pub name: String,
}

impl PayloadPayee {
    /// Creates a rename payload.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Service for the payees of a budget.
pub type PayeeService<T> = ResourceService<T, Payee>;
