//! Request and response envelopes.
//!
//! Every YNAB body is wrapped in a fixed envelope whose inner key depends on
//! the resource:
//!
//! | Shape | JSON |
//! |-------|------|
//! | list response | `{"data": {"<plural>": [...], "server_knowledge": N}}` |
//! | single response | `{"data": {"<singular>": {...} or null}}` |
//! | write request | `{"<singular>": {...}}` |
//!
//! The types here read the key names from [`Resource::NAME`] and
//! [`Resource::PLURAL`], so one implementation serves every resource. Unknown
//! keys next to the resource key (for example `transaction_ids` on a
//! transaction create response) are ignored.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::rest::Resource;

const SERVER_KNOWLEDGE: &str = "server_knowledge";

/// The top-level `{"data": ...}` wrapper of every response.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<D> {
    /// The wrapped payload.
    pub data: D,
}

/// Inner payload of a list response.
#[derive(Debug)]
pub struct ListData<R> {
    /// Entities in server order.
    pub entities: Vec<R>,
    /// Server knowledge at the time of the read.
    pub server_knowledge: u64,
}

impl<'de, R: Resource> Deserialize<'de> for ListData<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ListVisitor<R>(PhantomData<R>);

        impl<'de, R: Resource> Visitor<'de> for ListVisitor<R> {
            type Value = ListData<R>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "an object with `{}` and `{SERVER_KNOWLEDGE}`", R::PLURAL)
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entities: Option<Vec<R>> = None;
                let mut server_knowledge: Option<u64> = None;

                while let Some(key) = map.next_key::<String>()? {
                    if key == R::PLURAL {
                        if entities.is_some() {
                            return Err(de::Error::duplicate_field(R::PLURAL));
                        }
                        entities = Some(map.next_value()?);
                    } else if key == SERVER_KNOWLEDGE {
                        if server_knowledge.is_some() {
                            return Err(de::Error::duplicate_field(SERVER_KNOWLEDGE));
                        }
                        server_knowledge = Some(map.next_value()?);
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }

                Ok(ListData {
                    entities: entities.ok_or_else(|| de::Error::missing_field(R::PLURAL))?,
                    server_knowledge: server_knowledge
                        .ok_or_else(|| de::Error::missing_field(SERVER_KNOWLEDGE))?,
                })
            }
        }

        deserializer.deserialize_map(ListVisitor(PhantomData))
    }
}

/// Inner payload of a single-entity response where the entity may be absent.
///
/// A `null` or missing entity key decodes to `None`.
#[derive(Debug)]
pub struct OptionalEntityData<R> {
    /// The entity, if the server returned one.
    pub entity: Option<R>,
}

impl<'de, R: Resource> Deserialize<'de> for OptionalEntityData<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntityVisitor<R>(PhantomData<R>);

        impl<'de, R: Resource> Visitor<'de> for EntityVisitor<R> {
            type Value = OptionalEntityData<R>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "an object with an optional `{}`", R::NAME)
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entity: Option<Option<R>> = None;

                while let Some(key) = map.next_key::<String>()? {
                    if key == R::NAME {
                        if entity.is_some() {
                            return Err(de::Error::duplicate_field(R::NAME));
                        }
                        entity = Some(map.next_value()?);
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }

                Ok(OptionalEntityData {
                    entity: entity.flatten(),
                })
            }
        }

        deserializer.deserialize_map(EntityVisitor(PhantomData))
    }
}

/// Inner payload of a write response, where the entity is required.
#[derive(Debug)]
pub struct EntityData<R> {
    /// The entity returned by the server.
    pub entity: R,
}

impl<'de, R: Resource> Deserialize<'de> for EntityData<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data = OptionalEntityData::<R>::deserialize(deserializer)?;
        data.entity
            .map(|entity| Self { entity })
            .ok_or_else(|| de::Error::missing_field(R::NAME))
    }
}

/// Outgoing `{"<singular>": payload}` wrapper for create and update bodies.
#[derive(Debug)]
pub struct PayloadEnvelope<'a, P> {
    key: &'static str,
    payload: &'a P,
}

impl<'a, P: Serialize> PayloadEnvelope<'a, P> {
    /// Wraps `payload` under the singular key of resource `R`.
    #[must_use]
    pub const fn new<R: Resource>(payload: &'a P) -> Self {
        Self {
            key: R::NAME,
            payload,
        }
    }

    /// Serializes the envelope to JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if the payload cannot be encoded.
    pub fn to_vec(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

impl<P: Serialize> Serialize for PayloadEnvelope<'_, P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, self.payload)?;
        map.end()
    }
}
