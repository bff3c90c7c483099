//! Path building for budget-scoped resources.
//!
//! Every resource lives under a budget:
//! - collection: `/budgets/{budget_id}/{plural}`
//! - member: `/budgets/{budget_id}/{plural}/{id}`
//!
//! Ids are percent-encoded as single path segments. Ordinary ids such as
//! UUIDs or the `last-used` budget alias render unchanged.
//!
//! # Example
//!
//! ```rust
//! use ynab_api::rest::{collection_path, member_path};
//!
//! assert_eq!(collection_path("B1", "accounts"), "/budgets/B1/accounts");
//! assert_eq!(member_path("B1", "accounts", "A1"), "/budgets/B1/accounts/A1");
//! assert_eq!(member_path("B1", "accounts", "a/b"), "/budgets/B1/accounts/a%2Fb");
//! ```

use urlencoding::encode;

/// Builds the collection path for a resource inside a budget.
#[must_use]
pub fn collection_path(budget_id: &str, plural: &str) -> String {
    format!("/budgets/{}/{plural}", encode(budget_id))
}

/// Builds the path of a single resource inside a budget.
///
/// `id` must be non-empty: an empty id would render the collection path
/// with a trailing slash, which is where creates are posted.
#[must_use]
pub fn member_path(budget_id: &str, plural: &str, id: &str) -> String {
    debug_assert!(!id.is_empty(), "resource id must not be empty");
    format!("{}/{}", collection_path(budget_id, plural), encode(id))
}

/// Appends a query fragment, adding `?` only when the fragment is non-empty.
#[must_use]
pub fn with_query(path: String, query: &str) -> String {
    if query.is_empty() {
        path
    } else {
        format!("{path}?{query}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_path() {
        assert_eq!(collection_path("B1", "payees"), "/budgets/B1/payees");
        assert_eq!(
            collection_path("last-used", "accounts"),
            "/budgets/last-used/accounts"
        );
    }

    #[test]
    fn test_member_path_with_uuid() {
        assert_eq!(
            member_path(
                "aa248caa-eed7-4575-a990-717386438d2c",
                "transactions",
                "5c7d3d1f-9d1c-4c8e-9d5e-2b3f1a2c3d4e"
            ),
            "/budgets/aa248caa-eed7-4575-a990-717386438d2c/transactions/5c7d3d1f-9d1c-4c8e-9d5e-2b3f1a2c3d4e"
        );
    }

    #[test]
    fn test_ids_are_encoded_as_single_segments() {
        assert_eq!(
            member_path("B 1", "accounts", "../x?y"),
            "/budgets/B%201/accounts/..%2Fx%3Fy"
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "resource id must not be empty")]
    fn test_member_path_rejects_empty_id() {
        let _ = member_path("B1", "accounts", "");
    }

    #[test]
    fn test_with_query_skips_empty_fragment() {
        assert_eq!(with_query("/a".to_string(), ""), "/a");
        assert_eq!(with_query("/a".to_string(), "k=1"), "/a?k=1");
    }
}
