//! Budget resource implementations.
//!
//! | Resource | list | get | create | update | delete |
//! |----------|------|-----|--------|--------|--------|
//! | [`Account`] | yes | yes | yes | | |
//! | [`Payee`] | yes | yes | | `PATCH` | |
//! | [`Transaction`] | yes | yes | yes | `PUT` | yes |
//!
//! Each resource is used through a [`ResourceService`](crate::rest::ResourceService),
//! usually obtained from [`YnabClient`](crate::clients::YnabClient):
//!
//! ```rust,ignore
//! let payees = client.payees().list("last-used", None).await?;
//! let renamed = client
//!     .payees()
//!     .update("last-used", &payees[0].id, &PayloadPayee::new("Grocer"))
//!     .await?;
//! ```

mod account;
mod payee;
mod transaction;

pub use account::{Account, AccountService, AccountType, PayloadAccount};
pub use payee::{Payee, PayeeService, PayloadPayee};
pub use transaction::{
    ClearedStatus, FlagColor, PayloadTransaction, Transaction, TransactionService,
};
