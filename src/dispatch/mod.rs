use serde_json::Value;

use crate::consts::{ALL_SENTINEL, MAX_IDS_PER_REQUEST};
use crate::error::Error;
use crate::network::Connection;
use crate::records::Record;
use crate::registry::ResourceDescriptor;

pub mod query;

use query::{Id, Query};

/// Accessor result, shaped by the accessor's argument
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<R> {
    /// Single id was requested
    One(R),

    /// Ids list or `"all"` was requested
    Many(Vec<R>)
}

impl<R> Fetched<R> {
    #[inline]
    pub fn is_one(&self) -> bool {
        matches!(self, Self::One(_))
    }

    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(records) => records.len()
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the single record, `None` if a list was requested
    #[inline]
    pub fn one(self) -> Option<R> {
        match self {
            Self::One(record) => Some(record),
            Self::Many(_) => None
        }
    }

    #[inline]
    pub fn into_vec(self) -> Vec<R> {
        match self {
            Self::One(record) => vec![record],
            Self::Many(records) => records
        }
    }
}

impl<R> IntoIterator for Fetched<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

/// Join ids into the `?ids=` parameter value
///
/// `[1, 2, 3]` -> `1,2,3`
pub fn join_ids(ids: &[Id]) -> String {
    ids.iter()
        .map(Id::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// `route?ids={csv}`
#[inline]
pub fn batch_route(route: &str, ids: &[Id]) -> String {
    format!("{route}?ids={}", join_ids(ids))
}

/// Split ids into chunks the API accepts in one request
#[inline]
pub fn chunk_ids(ids: &[Id]) -> std::slice::Chunks<'_, Id> {
    ids.chunks(MAX_IDS_PER_REQUEST)
}

/// Build records from a json array, keeping the server's order
pub fn records_from_json<R: Record>(route: &str, json: Value, connection: &Connection) -> Result<Vec<R>, Error> {
    let Value::Array(objects) = json else {
        return Err(Error::malformed(route, "expected an array of objects"));
    };

    objects.into_iter()
        .map(|object| R::from_json(object, connection))
        .collect()
}

fn ensure_kind<R: Record>(descriptor: &ResourceDescriptor) -> Result<(), Error> {
    if descriptor.record == R::KIND {
        Ok(())
    } else {
        Err(Error::Configuration(format!(
            "resource {:?} builds {:?} records, not {:?}",
            descriptor.name,
            descriptor.record,
            R::KIND
        )))
    }
}

/// Fetch one record by id, `route/{id}`
#[tracing::instrument(level = "trace", skip(descriptor, connection), fields(resource = descriptor.name))]
pub fn fetch_one<R: Record>(descriptor: &ResourceDescriptor, connection: &Connection, id: &Id) -> Result<R, Error> {
    ensure_kind::<R>(descriptor)?;

    let json = connection.get_json(&format!("{}/{id}", descriptor.route))?;

    R::from_json(json, connection)
}

/// Fetch records of the ids, one request per chunk of at most 200 ids
///
/// Chunks are requested sequentially and the results are concatenated
/// in chunk order, so the output looks like one unchunked request
#[tracing::instrument(level = "trace", skip_all, fields(resource = descriptor.name, ids = ids.len()))]
pub fn fetch_batches<R: Record>(descriptor: &ResourceDescriptor, connection: &Connection, ids: &[Id]) -> Result<Vec<R>, Error> {
    ensure_kind::<R>(descriptor)?;

    let mut records = Vec::with_capacity(ids.len());

    for chunk in chunk_ids(ids) {
        let route = batch_route(descriptor.route, chunk);

        tracing::trace!(?route, chunk = chunk.len(), "Fetching chunk");

        let json = connection.get_json(&route)?;

        records.extend(records_from_json::<R>(&route, json, connection)?);
    }

    Ok(records)
}

/// Enumerate every id of the resource, `route` without parameters
#[tracing::instrument(level = "trace", skip_all, fields(resource = descriptor.name))]
pub fn fetch_ids(descriptor: &ResourceDescriptor, connection: &Connection) -> Result<Vec<Id>, Error> {
    connection.get(descriptor.route)
}

/// Perform requests needed by the query and shape the result by it
///
/// - `Id`, `IdStr` -> one `route/{id}` request, [`Fetched::One`]
/// - `All` -> ids enumeration and chunked batches, [`Fetched::Many`]
/// - `Ids` -> chunked batches, [`Fetched::Many`]
#[tracing::instrument(level = "debug", skip(descriptor, connection), fields(resource = descriptor.name))]
pub fn dispatch<R: Record>(descriptor: &ResourceDescriptor, connection: &Connection, query: Query) -> Result<Fetched<R>, Error> {
    ensure_kind::<R>(descriptor)?;

    match query {
        Query::Id(id) => fetch_one(descriptor, connection, &Id::Num(id)).map(Fetched::One),

        Query::IdStr(id) if id == ALL_SENTINEL => dispatch(descriptor, connection, Query::All),
        Query::IdStr(id) => fetch_one(descriptor, connection, &Id::Str(id)).map(Fetched::One),

        Query::All => {
            let ids = fetch_ids(descriptor, connection)?;

            tracing::debug!(ids = ids.len(), "Fetching every record");

            fetch_batches(descriptor, connection, &ids).map(Fetched::Many)
        }

        Query::Ids(ids) => fetch_batches(descriptor, connection, &ids).map(Fetched::Many)
    }
}
