//! Account resource implementation.
//!
//! Accounts hold the money of a budget: checking and savings accounts, cash,
//! credit cards and debts. They can be listed, fetched by id and created.
//! The API offers no update or delete for accounts.
//!
//! # Example
//!
//! ```rust,ignore
//! use ynab_api::rest::resources::{AccountType, PayloadAccount};
//!
//! let accounts = client.accounts();
//!
//! let snapshot = accounts.list("last-used", None).await?;
//! for account in snapshot.active() {
//!     println!("{}: {}", account.name, account.balance);
//! }
//!
//! let savings = accounts
//!     .create("last-used", &PayloadAccount::new("Savings", AccountType::Savings, 1000))
//!     .await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{Creatable, Resource, ResourceService};

/// Kind of an account.
///
/// Types this crate does not know yet decode as [`AccountType::Unknown`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum AccountType {
    /// A checking account.
    Checking,
    /// A savings account.
    Savings,
    /// Cash on hand.
    Cash,
    /// A credit card.
    CreditCard,
    /// A line of credit.
    LineOfCredit,
    /// A tracking account for any other asset.
    OtherAsset,
    /// A tracking account for any other liability.
    OtherLiability,
    /// A mortgage.
    Mortgage,
    /// An auto loan.
    AutoLoan,
    /// A student loan.
    StudentLoan,
    /// A personal loan.
    PersonalLoan,
    /// Medical debt.
    MedicalDebt,
    /// Any other debt.
    OtherDebt,
    /// A type not recognized by this version of the crate.
    #[serde(other)]
    Unknown,
}

impl AccountType {
    /// Returns `true` for loan and debt accounts.
    #[must_use]
    pub const fn is_debt(self) -> bool {
        matches!(
            self,
            Self::Mortgage
                | Self::AutoLoan
                | Self::StudentLoan
                | Self::PersonalLoan
                | Self::MedicalDebt
                | Self::OtherDebt
        )
    }
}

/// An account in a budget.
///
/// Amounts are in milliunits (`1000` is one unit of the budget currency).
/// Every field defaults when absent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Account {
    /// The unique identifier of the account.
    pub id: String,

    /// The name of the account.
    pub name: String,

    /// The kind of account.
    #[serde(rename = "type")]
    pub account_type: Option<AccountType>,

    /// Whether the account is on budget.
    pub on_budget: bool,

    /// Whether the account is closed.
    pub closed: bool,

    /// Free-form note.
    pub note: Option<String>,

    /// Current balance.
    pub balance: i64,

    /// Balance of cleared transactions.
    pub cleared_balance: i64,

    /// Balance of uncleared transactions.
    pub uncleared_balance: i64,

    /// The payee used when transferring to this account.
    pub transfer_payee_id: Option<String>,

    /// Whether the account is linked for direct import.
    pub direct_import_linked: bool,

    /// Whether the direct import link is in an error state.
    pub direct_import_in_error: bool,

    /// When the account was last reconciled.
    pub last_reconciled_at: Option<DateTime<Utc>>,

    /// Original balance of a debt account.
    pub debt_original_balance: Option<i64>,

    /// Whether the account has been deleted. Only delta requests return
    /// deleted accounts.
    pub deleted: bool,
}

impl Resource for Account {
    const NAME: &'static str = "account";
    const PLURAL: &'static str = "accounts";

    fn id(&self) -> &str {
        &self.id
    }

    fn is_deleted(&self) -> bool {
        self.deleted
    }
}

impl Creatable for Account {
    type CreatePayload = PayloadAccount;
}

/// Fields accepted when creating an account.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PayloadAccount {
    /// The name of the new account.
    pub name: String,

    /// The kind of account.
    #[serde(rename = "type")]
    pub account_type: AccountType,

    /// Starting balance in milliunits.
    pub balance: i64,
}

impl PayloadAccount {
    /// Creates a payload for a new account.
    #[must_use]
    pub fn new(name: impl Into<String>, account_type: AccountType, balance: i64) -> Self {
        Self {
            name: name.into(),
            account_type,
            balance,
        }
    }
}

/// Service for the accounts of a budget.
pub type AccountService<T> = ResourceService<T, Account>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_deserialization() {
        let json = r#"{
            "id": "A1",
            "name": "Checking",
            "type": "checking",
            "on_budget": true,
            "closed": false,
            "note": null,
            "balance": 250000,
            "cleared_balance": 200000,
            "uncleared_balance": 50000,
            "transfer_payee_id": "P-A1",
            "direct_import_linked": false,
            "direct_import_in_error": false,
            "last_reconciled_at": "2024-03-01T12:30:00Z",
            "debt_original_balance": null,
            "deleted": false
        }"#;

        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.id, "A1");
        assert_eq!(account.account_type, Some(AccountType::Checking));
        assert!(account.on_budget);
        assert_eq!(account.balance, 250_000);
        assert_eq!(account.transfer_payee_id.as_deref(), Some("P-A1"));
        assert_eq!(
            account.last_reconciled_at.map(|t| t.to_rfc3339()),
            Some("2024-03-01T12:30:00+00:00".to_string())
        );
        assert!(!account.is_deleted());
    }

    #[test]
    fn test_account_decodes_with_only_id_and_name() {
        let account: Account = serde_json::from_str(r#"{"id":"A1","name":"Checking"}"#).unwrap();
        assert_eq!(account.name, "Checking");
        assert!(account.account_type.is_none());
        assert_eq!(account.balance, 0);
    }

    #[test]
    fn test_account_type_wire_names() {
        let types: Vec<AccountType> =
            serde_json::from_str(r#"["creditCard","lineOfCredit","otherAsset","medicalDebt"]"#)
                .unwrap();
        assert_eq!(
            types,
            [
                AccountType::CreditCard,
                AccountType::LineOfCredit,
                AccountType::OtherAsset,
                AccountType::MedicalDebt
            ]
        );
        assert!(AccountType::AutoLoan.is_debt());
        assert!(!AccountType::CreditCard.is_debt());
    }

    #[test]
    fn test_unrecognized_account_type_decodes_as_unknown() {
        let account: Account =
            serde_json::from_str(r#"{"id":"A7","name":"Brokerage","type":"brokerage"}"#).unwrap();
        assert_eq!(account.account_type, Some(AccountType::Unknown));
        assert!(!AccountType::Unknown.is_debt());
    }

    #[test]
    fn test_payload_account_serialization() {
        let payload = PayloadAccount::new("Savings", AccountType::Savings, 1000);
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"name":"Savings","type":"savings","balance":1000}"#
        );
    }
}
