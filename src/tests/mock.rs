use std::sync::{Arc, Mutex, PoisonError};

use serde_json::{json, Value};

use crate::prelude::*;

pub const BASE_URI: &str = "https://api.test/v2/";

type Handler = Box<dyn Fn(&str) -> Result<Value, Error> + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Requested URL without the base URI
    pub route: String,

    pub authorization: Option<String>
}

/// Offline transport answering requests with a closure
///
/// The closure receives the route (URL without the base URI)
/// and every request is logged
pub struct MockTransport {
    handler: Handler,
    requests: Mutex<Vec<Request>>
}

impl MockTransport {
    pub fn new(handler: impl Fn(&str) -> Result<Value, Error> + Send + Sync + 'static) -> Arc<Self> {
        Arc::new(Self {
            handler: Box::new(handler),
            requests: Mutex::new(Vec::new())
        })
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn routes(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .map(|request| request.route)
            .collect()
    }

    pub fn count(&self) -> usize {
        self.requests().len()
    }
}

impl Transport for MockTransport {
    fn fetch_json(&self, url: &str, headers: &[(&str, &str)]) -> Result<Value, Error> {
        let route = url.strip_prefix(BASE_URI).unwrap_or(url);

        let authorization = headers.iter()
            .find(|(name, _)| *name == "Authorization")
            .map(|(_, value)| value.to_string());

        self.requests.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Request {
                route: route.to_string(),
                authorization
            });

        (self.handler)(route)
    }
}

pub fn connection(mock: &Arc<MockTransport>) -> Connection {
    Connection::new(BASE_URI).with_transport(mock.clone())
}

pub fn not_found(route: &str) -> Error {
    Error::NotFound {
        url: format!("{BASE_URI}{route}")
    }
}

/// Ids of the `{resource}?ids=...` route
pub fn ids_of(route: &str, resource: &str) -> Option<Vec<String>> {
    let ids = route.strip_prefix(resource)?.strip_prefix("?ids=")?;

    Some(ids.split(',')
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect())
}

pub fn named(id: &str, prefix: &str) -> Value {
    let id = id.parse::<u64>().unwrap();

    json!({
        "id": id,
        "name": format!("{prefix} {id}")
    })
}

/// Answer `{resource}?ids=...` with a record per requested id
pub fn batch(route: &str, resource: &str, prefix: &str) -> Option<Value> {
    let ids = ids_of(route, resource)?;

    Some(Value::Array(ids.iter().map(|id| named(id, prefix)).collect()))
}

/// Bootstrap responses of the account api
pub fn account(route: &str, permissions: &[&str]) -> Option<Value> {
    match route {
        "tokeninfo" => Some(json!({
            "id": "token-id",
            "name": "test key",
            "permissions": permissions
        })),

        "account/" => Some(json!({
            "id": "account-id",
            "name": "Quaggan.1234",
            "world": 1001,
            "guilds": ["guild-id"]
        })),

        _ => None
    }
}
