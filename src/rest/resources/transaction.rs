//! Transaction resource implementation.
//!
//! Transactions support the full set of operations: list, get, create,
//! update (`PUT`) and delete.
//!
//! # Example
//!
//! ```rust,ignore
//! use chrono::NaiveDate;
//! use ynab_api::rest::resources::{ClearedStatus, PayloadTransaction};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let payload = PayloadTransaction::new("A1", date, -12_500)
//!     .with_payee_name("Coffee Shop")
//!     .with_cleared(ClearedStatus::Cleared);
//!
//! let created = client.transactions().create("last-used", &payload).await?;
//! client.transactions().delete("last-used", &created.id).await?;
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{Creatable, Deletable, Resource, ResourceService, Updatable};

/// Cleared state of a transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClearedStatus {
    /// Cleared by the bank.
    Cleared,
    /// Not yet cleared.
    #[default]
    Uncleared,
    /// Cleared and locked by a reconciliation.
    Reconciled,
}

/// Flag attached to a transaction.
///
/// Colors this crate does not know yet decode as [`FlagColor::Unknown`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FlagColor {
    /// Red flag.
    Red,
    /// Orange flag.
    Orange,
    /// Yellow flag.
    Yellow,
    /// Green flag.
    Green,
    /// Blue flag.
    Blue,
    /// Purple flag.
    Purple,
    /// A color not recognized by this version of the crate.
    #[serde(other)]
    Unknown,
}

/// A transaction in a budget.
///
/// `amount` is in milliunits; outflows are negative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    /// The unique identifier of the transaction.
    pub id: String,

    /// Date of the transaction.
    pub date: NaiveDate,

    /// Amount in milliunits.
    pub amount: i64,

    /// Free-form memo.
    #[serde(default)]
    pub memo: Option<String>,

    /// Cleared state.
    #[serde(default)]
    pub cleared: ClearedStatus,

    /// Whether the transaction has been approved.
    #[serde(default)]
    pub approved: bool,

    /// Flag attached to the transaction.
    #[serde(default)]
    pub flag_color: Option<FlagColor>,

    /// The account the transaction belongs to.
    pub account_id: String,

    /// The payee of the transaction.
    #[serde(default)]
    pub payee_id: Option<String>,

    /// Name of the payee, when the response includes it.
    #[serde(default)]
    pub payee_name: Option<String>,

    /// The category of the transaction.
    #[serde(default)]
    pub category_id: Option<String>,

    /// Set when the transaction is a transfer.
    #[serde(default)]
    pub transfer_account_id: Option<String>,

    /// Whether the transaction has been deleted.
    #[serde(default)]
    pub deleted: bool,
}

impl Transaction {
    /// Returns `true` if money leaves the account.
    #[must_use]
    pub const fn is_outflow(&self) -> bool {
        self.amount < 0
    }
}

impl Resource for Transaction {
    const NAME: &'static str = "transaction";
    const PLURAL: &'static str = "transactions";

    fn id(&self) -> &str {
        &self.id
    }

    fn is_deleted(&self) -> bool {
        self.deleted
    }
}

impl Creatable for Transaction {
    type CreatePayload = PayloadTransaction;
}

impl Updatable for Transaction {
    type UpdatePayload = PayloadTransaction;
    const UPDATE_METHOD: HttpMethod = HttpMethod::Put;
}

impl Deletable for Transaction {}

/// Fields accepted when creating or updating a transaction.
///
/// Optional fields are left out of the request body when `None`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PayloadTransaction {
    /// The account the transaction belongs to.
    pub account_id: String,

    /// Date of the transaction.
    pub date: NaiveDate,

    /// Amount in milliunits; outflows are negative.
    pub amount: i64,

    /// Existing payee to use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payee_id: Option<String>,

    /// Matched against existing payees; a new payee is created if none
    /// matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payee_name: Option<String>,

    /// Category to assign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,

    /// Free-form memo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,

    /// Cleared state; the server defaults to uncleared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleared: Option<ClearedStatus>,

    /// Approval state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved: Option<bool>,

    /// Flag to attach.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag_color: Option<FlagColor>,
}

impl PayloadTransaction {
    /// Creates a payload with only the required fields set.
    #[must_use]
    pub fn new(account_id: impl Into<String>, date: NaiveDate, amount: i64) -> Self {
        Self {
            account_id: account_id.into(),
            date,
            amount,
            payee_id: None,
            payee_name: None,
            category_id: None,
            memo: None,
            cleared: None,
            approved: None,
            flag_color: None,
        }
    }

    /// Sets the payee by id.
    #[must_use]
    pub fn with_payee_id(mut self, payee_id: impl Into<String>) -> Self {
        self.payee_id = Some(payee_id.into());
        self
    }

    /// Sets the payee by name.
    #[must_use]
    pub fn with_payee_name(mut self, payee_name: impl Into<String>) -> Self {
        self.payee_name = Some(payee_name.into());
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category_id(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    /// Sets the memo.
    #[must_use]
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    /// Sets the cleared state.
    #[must_use]
    pub const fn with_cleared(mut self, cleared: ClearedStatus) -> Self {
        self.cleared = Some(cleared);
        self
    }

    /// Sets the approval state.
    #[must_use]
    pub const fn with_approved(mut self, approved: bool) -> Self {
        self.approved = Some(approved);
        self
    }

    /// Sets the flag.
    #[must_use]
    pub const fn with_flag_color(mut self, flag_color: FlagColor) -> Self {
        self.flag_color = Some(flag_color);
        self
    }
}

/// Service for the transactions of a budget.
pub type TransactionService<T> = ResourceService<T, Transaction>;
