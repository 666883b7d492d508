use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::consts::API_BASE_URI;
use crate::error::Error;

pub mod basic;

pub use basic::MinreqTransport;

pub trait Transport: Send + Sync {
    /// Perform a GET request and decode its body as json
    ///
    /// Must fail with [`Error::NotFound`] on HTTP 404 and
    /// with [`Error::Auth`] on HTTP 403
    fn fetch_json(&self, url: &str, headers: &[(&str, &str)]) -> Result<Value, Error>;
}

/// Everything a request needs: base URI, optional api key and the transport
#[derive(Clone)]
pub struct Connection {
    base_uri: String,
    authorization: Option<String>,
    transport: Arc<dyn Transport>
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("base_uri", &self.base_uri)
            .field("authorized", &self.authorization.is_some())
            .finish()
    }
}

impl Default for Connection {
    #[inline]
    fn default() -> Self {
        Self::new(API_BASE_URI)
    }
}

impl Connection {
    /// Unauthenticated connection to given base URI using [`MinreqTransport`]
    ///
    /// Trailing slash is added to the base URI if it's missing
    pub fn new(base_uri: impl Into<String>) -> Self {
        let mut base_uri = base_uri.into();

        if !base_uri.ends_with('/') {
            base_uri.push('/');
        }

        Self {
            base_uri,
            authorization: None,
            transport: Arc::new(MinreqTransport::default())
        }
    }

    /// Send `Authorization: Bearer {api_key}` with every request
    #[inline]
    pub fn with_api_key(mut self, api_key: impl AsRef<str>) -> Self {
        self.authorization = Some(format!("Bearer {}", api_key.as_ref()));

        self
    }

    #[inline]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;

        self
    }

    #[inline]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    #[inline]
    pub fn is_authorized(&self) -> bool {
        self.authorization.is_some()
    }

    /// Full URL of the route, percent-encoded if it contains spaces
    ///
    /// - `items/12` -> `https://api.guildwars2.com/v2/items/12`
    /// - `characters?ids=Some Name` -> `https://api.guildwars2.com/v2/characters?ids=Some%20Name`
    pub fn url(&self, route: impl AsRef<str>) -> Result<String, Error> {
        let url = format!("{}{}", self.base_uri, route.as_ref());

        if url.contains(' ') {
            Ok(url::Url::parse(&url)?.to_string())
        } else {
            Ok(url)
        }
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub fn get_json(&self, route: &str) -> Result<Value, Error> {
        let url = self.url(route)?;

        tracing::trace!(?url, "Requesting API");

        match &self.authorization {
            Some(authorization) => self.transport.fetch_json(&url, &[("Authorization", authorization.as_str())]),
            None => self.transport.fetch_json(&url, &[])
        }
    }

    /// Request the route and deserialize the response
    pub fn get<T: DeserializeOwned>(&self, route: &str) -> Result<T, Error> {
        Ok(serde_json::from_value(self.get_json(route)?)?)
    }
}
