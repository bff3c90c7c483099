//! Query filter for list operations.
//!
//! The only criterion the API accepts on budget resource lists is
//! `last_knowledge_of_server`: passing the `server_knowledge` of an earlier
//! [`SearchResultSnapshot`](crate::rest::SearchResultSnapshot) returns only
//! the entities changed since then.

/// Optional criteria attached to a list request.
///
/// A `Filter` is immutable once built and renders deterministically.
///
/// # Example
///
/// ```rust
/// use ynab_api::rest::Filter;
///
/// assert_eq!(Filter::since(42).to_query(), "last_knowledge_of_server=42");
/// assert!(Filter::new().is_empty());
/// assert_eq!(Filter::new().to_query(), "");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Filter {
    last_knowledge_of_server: Option<u64>,
}

impl Filter {
    /// Creates a filter with no criteria.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_knowledge_of_server: None,
        }
    }

    /// Creates a filter selecting entities changed since `server_knowledge`.
    #[must_use]
    pub const fn since(server_knowledge: u64) -> Self {
        Self {
            last_knowledge_of_server: Some(server_knowledge),
        }
    }

    /// Returns the server knowledge this filter asks for changes since.
    #[must_use]
    pub const fn last_knowledge_of_server(&self) -> Option<u64> {
        self.last_knowledge_of_server
    }

    /// Returns `true` when no criterion is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.last_knowledge_of_server.is_none()
    }

    /// Renders the criteria as a query string without the leading `?`.
    ///
    /// An empty filter renders to an empty string.
    #[must_use]
    pub fn to_query(&self) -> String {
        let mut pairs = Vec::new();
        if let Some(knowledge) = self.last_knowledge_of_server {
            pairs.push(format!("last_knowledge_of_server={knowledge}"));
        }
        pairs.join("&")
    }
}

impl From<u64> for Filter {
    fn from(server_knowledge: u64) -> Self {
        Self::since(server_knowledge)
    }
}
