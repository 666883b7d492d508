use std::collections::HashSet;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::dispatch::{self, query::{Id, IntoId}};
use crate::error::Error;
use crate::network::Connection;
use crate::records::{Keyed, Record};
use crate::registry::ResourceDescriptor;

/// Partial account entry with the record it references attached
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry<E, R> {
    #[serde(flatten)]
    pub slot: E,

    /// `None` if the catalog didn't return the referenced record
    pub object: Option<R>
}

/// Account collection after enrichment
#[derive(Debug, Clone, PartialEq)]
pub enum Collection<E, R> {
    /// Nothing in the collection
    Empty,

    /// Collection of partial entries (`{ id, count, ... }`), empty slots are `None`
    Entries(Vec<Option<Entry<E, R>>>),

    /// Collection of bare ids, resolved into records
    Records(Vec<R>)
}

impl<E, R> Collection<E, R> {
    /// Get enriched entries, failing if the collection was made of bare ids
    pub fn into_entries(self, route: &str) -> Result<Vec<Option<Entry<E, R>>>, Error> {
        match self {
            Self::Empty => Ok(Vec::new()),
            Self::Entries(entries) => Ok(entries),
            Self::Records(_) => Err(Error::malformed(route, "expected objects, got bare ids"))
        }
    }

    /// Get resolved records, failing if the collection was made of objects
    pub fn into_records(self, route: &str) -> Result<Vec<R>, Error> {
        match self {
            Self::Empty => Ok(Vec::new()),
            Self::Records(records) => Ok(records),
            Self::Entries(_) => Err(Error::malformed(route, "expected bare ids, got objects"))
        }
    }
}

/// Keep the first occurrence of every id
pub(crate) fn distinct(ids: impl IntoIterator<Item = Id>) -> Vec<Id> {
    let mut seen = HashSet::new();

    ids.into_iter()
        .filter(|id| seen.insert(id.clone()))
        .collect()
}

/// Resolve records referenced by the raw account collection
///
/// Objects get the resolved record attached under `object`,
/// bare ids are replaced by their records. Null slots stay as they are
#[tracing::instrument(level = "debug", skip_all, fields(resource = descriptor.name, entries = raw.len()))]
pub fn enrich<E, R>(descriptor: &ResourceDescriptor, connection: &Connection, raw: Vec<Value>) -> Result<Collection<E, R>, Error>
where
    E: Keyed + DeserializeOwned,
    R: Record
{
    // Shape can't be told without entries
    if raw.is_empty() {
        return Ok(Collection::Empty);
    }

    // Slots which are all empty are still slots
    if raw.iter().all(Value::is_null) || raw.iter().any(Value::is_object) {
        enrich_entries(descriptor, connection, raw).map(Collection::Entries)
    } else {
        resolve_ids(descriptor, connection, raw).map(Collection::Records)
    }
}

/// Attach records to the partial entries of the collection
///
/// Null slots are kept as `None` and don't cost any request
pub fn enrich_entries<E, R>(descriptor: &ResourceDescriptor, connection: &Connection, raw: Vec<Value>) -> Result<Vec<Option<Entry<E, R>>>, Error>
where
    E: Keyed + DeserializeOwned,
    R: Record
{
    let mut entries = raw.into_iter()
        .map(|value| match value {
            Value::Null => Ok(None),

            value => serde_json::from_value::<E>(value).map(|slot| Some(Entry {
                slot,
                object: None
            }))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let ids = distinct(entries.iter().flatten().map(|entry| entry.slot.key()));

    tracing::trace!(ids = ids.len(), "Resolving referenced records");

    for chunk in dispatch::chunk_ids(&ids) {
        for record in dispatch::fetch_batches::<R>(descriptor, connection, chunk)? {
            let key = record.key();

            for entry in entries.iter_mut().flatten().filter(|entry| entry.slot.key() == key) {
                entry.object = Some(record.clone());
            }
        }
    }

    Ok(entries)
}

fn resolve_ids<R: Record>(descriptor: &ResourceDescriptor, connection: &Connection, raw: Vec<Value>) -> Result<Vec<R>, Error> {
    let ids = raw.iter()
        .filter(|value| !value.is_null())
        .map(IntoId::into_id)
        .collect::<Result<Vec<_>, _>>()?;

    dispatch::fetch_batches(descriptor, connection, &distinct(ids))
}
