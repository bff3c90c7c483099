//! Result of a list operation.
//!
//! A [`SearchResultSnapshot`] pairs the listed entities with the server
//! knowledge at read time. Feed [`SearchResultSnapshot::next_filter`] into the
//! next `list()` call to receive only what changed in between:
//!
//! ```rust,ignore
//! let full = client.accounts().list("last-used", None).await?;
//! // ... later
//! let delta = client
//!     .accounts()
//!     .list("last-used", Some(&full.next_filter()))
//!     .await?;
//! for gone in delta.deleted() {
//!     println!("{} was deleted", gone.name);
//! }
//! ```

use std::ops::Deref;

use crate::rest::{Filter, Resource};

/// Entities returned by a list call plus the server knowledge of that read.
///
/// Implements `Deref<Target = [R]>`, so it can be iterated and indexed like
/// a slice. Entities keep server order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResultSnapshot<R> {
    /// Entities in server order. In a delta response this includes deleted
    /// entities.
    pub entities: Vec<R>,
    /// Server knowledge at the time of the read.
    pub server_knowledge: u64,
}

impl<R> SearchResultSnapshot<R> {
    /// Creates a snapshot.
    #[must_use]
    pub const fn new(entities: Vec<R>, server_knowledge: u64) -> Self {
        Self {
            entities,
            server_knowledge,
        }
    }

    /// Returns a filter requesting changes made after this snapshot.
    #[must_use]
    pub const fn next_filter(&self) -> Filter {
        Filter::since(self.server_knowledge)
    }

    /// Consumes the snapshot and returns the entities.
    #[must_use]
    pub fn into_entities(self) -> Vec<R> {
        self.entities
    }
}

impl<R: Resource> SearchResultSnapshot<R> {
    /// Iterates over entities not flagged as deleted.
    pub fn active(&self) -> impl Iterator<Item = &R> {
        self.entities.iter().filter(|e| !e.is_deleted())
    }

    /// Iterates over entities flagged as deleted.
    pub fn deleted(&self) -> impl Iterator<Item = &R> {
        self.entities.iter().filter(|e| e.is_deleted())
    }

    /// Finds an entity by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&R> {
        self.entities.iter().find(|e| e.id() == id)
    }
}

impl<R> Deref for SearchResultSnapshot<R> {
    type Target = [R];

    fn deref(&self) -> &Self::Target {
        &self.entities
    }
}

impl<R> IntoIterator for SearchResultSnapshot<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
    struct Item {
        id: String,
        deleted: bool,
    }

    impl Resource for Item {
        const NAME: &'static str = "item";
        const PLURAL: &'static str = "items";

        fn id(&self) -> &str {
            &self.id
        }

        fn is_deleted(&self) -> bool {
            self.deleted
        }
    }

    fn item(id: &str, deleted: bool) -> Item {
        Item {
            id: id.to_string(),
            deleted,
        }
    }

    #[test]
    fn test_next_filter_uses_server_knowledge() {
        let snapshot: SearchResultSnapshot<Item> = SearchResultSnapshot::new(vec![], 57);
        assert_eq!(snapshot.next_filter(), Filter::since(57));
    }

    #[test]
    fn test_deref_preserves_order() {
        let snapshot = SearchResultSnapshot::new(vec![item("b", false), item("a", false)], 1);
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].id, "b");
        assert_eq!(snapshot[1].id, "a");
    }

    #[test]
    fn test_active_and_deleted_partition_entities() {
        let snapshot = SearchResultSnapshot::new(
            vec![item("a", false), item("b", true), item("c", false)],
            9,
        );

        let active: Vec<&str> = snapshot.active().map(Resource::id).collect();
        let deleted: Vec<&str> = snapshot.deleted().map(Resource::id).collect();
        assert_eq!(active, ["a", "c"]);
        assert_eq!(deleted, ["b"]);
    }

    #[test]
    fn test_find_by_id() {
        let snapshot = SearchResultSnapshot::new(vec![item("a", false), item("b", true)], 2);
        assert_eq!(snapshot.find("b"), Some(&item("b", true)));
        assert!(snapshot.find("z").is_none());
    }

    #[test]
    fn test_into_entities_and_into_iter() {
        let snapshot = SearchResultSnapshot::new(vec![item("a", false)], 2);
        assert_eq!(snapshot.clone().into_entities(), vec![item("a", false)]);
        assert_eq!(snapshot.into_iter().count(), 1);
    }
}
