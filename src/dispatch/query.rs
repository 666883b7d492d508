use std::collections::HashSet;
use std::fmt;

use serde::{Serialize, Deserialize};
use serde_json::Value;

use crate::consts::ALL_SENTINEL;
use crate::error::Error;

/// Identifier of a remote object
///
/// Most resources use numbers, some (guilds, characters, raids) use strings
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Num(u64),
    Str(String)
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(id) => write!(f, "{id}"),
            Self::Str(id) => f.write_str(id)
        }
    }
}

impl From<u64> for Id {
    #[inline]
    fn from(value: u64) -> Self {
        Self::Num(value)
    }
}

impl From<u32> for Id {
    #[inline]
    fn from(value: u32) -> Self {
        Self::Num(value as u64)
    }
}

impl From<String> for Id {
    #[inline]
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for Id {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// What the caller asked an accessor for
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Query {
    /// One numeric id, `route/{id}`
    Id(u64),

    /// One string id, `route/{id}`
    IdStr(String),

    /// Every id of the resource
    All,

    /// Batch of ids, `route?ids={csv}`
    Ids(Vec<Id>)
}

/// Conversion of a single accessor argument into an [`Id`]
pub trait IntoId {
    fn into_id(self) -> Result<Id, Error>;
}

/// Conversion of an accessor argument into a [`Query`]
///
/// Conversion is done before any request is made, so unsupported
/// arguments never reach the network
pub trait IntoQuery {
    fn into_query(self) -> Result<Query, Error>;
}

macro_rules! impl_unsigned {
    ($($type:ty),*) => {
        $(
            impl IntoId for $type {
                #[inline]
                fn into_id(self) -> Result<Id, Error> {
                    Ok(Id::Num(self as u64))
                }
            }

            impl IntoQuery for $type {
                #[inline]
                fn into_query(self) -> Result<Query, Error> {
                    Ok(Query::Id(self as u64))
                }
            }
        )*
    };
}

macro_rules! impl_signed {
    ($($type:ty),*) => {
        $(
            impl IntoId for $type {
                fn into_id(self) -> Result<Id, Error> {
                    u64::try_from(self)
                        .map(Id::Num)
                        .map_err(|_| Error::UnsupportedArgument(format!("negative {} {}", stringify!($type), self)))
                }
            }

            impl IntoQuery for $type {
                fn into_query(self) -> Result<Query, Error> {
                    match self.into_id()? {
                        Id::Num(id) => Ok(Query::Id(id)),
                        Id::Str(id) => Ok(Query::IdStr(id))
                    }
                }
            }
        )*
    };
}

impl_unsigned!(u16, u32, u64, usize);
impl_signed!(i32, i64);

impl IntoId for Id {
    #[inline]
    fn into_id(self) -> Result<Id, Error> {
        Ok(self)
    }
}

impl IntoId for &Id {
    #[inline]
    fn into_id(self) -> Result<Id, Error> {
        Ok(self.clone())
    }
}

impl IntoId for String {
    #[inline]
    fn into_id(self) -> Result<Id, Error> {
        Ok(Id::Str(self))
    }
}

impl IntoId for &String {
    #[inline]
    fn into_id(self) -> Result<Id, Error> {
        Ok(Id::Str(self.clone()))
    }
}

impl IntoId for &str {
    #[inline]
    fn into_id(self) -> Result<Id, Error> {
        Ok(Id::Str(self.to_string()))
    }
}

impl IntoId for &Value {
    fn into_id(self) -> Result<Id, Error> {
        match self {
            Value::Number(number) => number.as_u64()
                .map(Id::Num)
                .ok_or_else(|| Error::UnsupportedArgument(format!("json number {number}"))),

            Value::String(id) => Ok(Id::Str(id.clone())),

            other => Err(Error::UnsupportedArgument(format!("json {}", json_type_name(other))))
        }
    }
}

impl IntoQuery for Query {
    fn into_query(self) -> Result<Query, Error> {
        match self {
            Self::IdStr(id) if id == ALL_SENTINEL => Ok(Self::All),
            query => Ok(query)
        }
    }
}

impl IntoQuery for Id {
    #[inline]
    fn into_query(self) -> Result<Query, Error> {
        match self {
            Id::Num(id) => Ok(Query::Id(id)),
            Id::Str(id) => id.into_query()
        }
    }
}

impl IntoQuery for String {
    #[inline]
    fn into_query(self) -> Result<Query, Error> {
        if self == ALL_SENTINEL {
            Ok(Query::All)
        } else {
            Ok(Query::IdStr(self))
        }
    }
}

impl IntoQuery for &String {
    #[inline]
    fn into_query(self) -> Result<Query, Error> {
        self.as_str().into_query()
    }
}

impl IntoQuery for &str {
    #[inline]
    fn into_query(self) -> Result<Query, Error> {
        self.to_string().into_query()
    }
}

impl<T: IntoId> IntoQuery for Vec<T> {
    fn into_query(self) -> Result<Query, Error> {
        self.into_iter()
            .map(IntoId::into_id)
            .collect::<Result<Vec<_>, _>>()
            .map(Query::Ids)
    }
}

impl<T: IntoId + Clone> IntoQuery for &[T] {
    fn into_query(self) -> Result<Query, Error> {
        self.to_vec().into_query()
    }
}

impl<T: IntoId, const N: usize> IntoQuery for [T; N] {
    fn into_query(self) -> Result<Query, Error> {
        Vec::from(self).into_query()
    }
}

/// Sets have no order, so results of chunked requests
/// couldn't be matched with the caller's input order
impl<T, S> IntoQuery for HashSet<T, S> {
    #[inline]
    fn into_query(self) -> Result<Query, Error> {
        Err(Error::UnsupportedArgument(std::any::type_name::<HashSet<T, S>>().to_string()))
    }
}

impl IntoQuery for &Value {
    fn into_query(self) -> Result<Query, Error> {
        match self {
            Value::Array(ids) => ids.iter()
                .map(IntoId::into_id)
                .collect::<Result<Vec<_>, _>>()
                .map(Query::Ids),

            value => value.into_id()?.into_query()
        }
    }
}

impl IntoQuery for Value {
    #[inline]
    fn into_query(self) -> Result<Query, Error> {
        (&self).into_query()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null      => "null",
        Value::Bool(_)   => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_)  => "array",
        Value::Object(_) => "object"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_turn_into_sentinel_or_id() {
        assert_eq!("all".into_query().unwrap(), Query::All);
        assert_eq!("Some Name".into_query().unwrap(), Query::IdStr(String::from("Some Name")));
        assert_eq!(Query::IdStr(String::from("all")).into_query().unwrap(), Query::All);
    }

    #[test]
    fn negative_ids_are_rejected() {
        assert!(matches!((-5i32).into_query(), Err(Error::UnsupportedArgument(_))));
        assert!(matches!(vec![1i32, -2].into_query(), Err(Error::UnsupportedArgument(_))));
    }

    #[test]
    fn json_arguments() {
        assert_eq!(serde_json::json!([1, "two"]).into_query().unwrap(), Query::Ids(vec![Id::Num(1), Id::from("two")]));
        assert_eq!(serde_json::json!(12).into_query().unwrap(), Query::Id(12));

        assert!(matches!(serde_json::json!({ "id": 1 }).into_query(), Err(Error::UnsupportedArgument(name)) if name == "json object"));
        assert!(matches!(serde_json::json!(1.5).into_query(), Err(Error::UnsupportedArgument(_))));
    }

    #[test]
    fn sets_are_unsupported() {
        let set = HashSet::from([1, 2, 3]);

        match set.into_query() {
            Err(Error::UnsupportedArgument(name)) => assert!(name.contains("HashSet")),
            other => panic!("unexpected result: {other:?}")
        }
    }
}
