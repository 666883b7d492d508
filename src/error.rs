#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Requested id (or id batch) doesn't exist on the remote service
    #[error("Likely bad id: 404 Not Found | URL: {url}")]
    NotFound {
        url: String
    },

    /// Remote service rejected the api key
    #[error("Likely bad api key: 403 Forbidden | URL: {url}")]
    Auth {
        url: String
    },

    /// Api key doesn't have the scope required by the accessor
    ///
    /// `(scope)`
    #[error("Api key is missing required permission: {0}")]
    Permission(String),

    /// Accessor received an argument it can't turn into a request
    ///
    /// `(type name)`
    #[error("Accessors do not support {0}")]
    UnsupportedArgument(String),

    /// Accessor is wired to a resource the registry doesn't know
    #[error("Resources registry misconfigured: {0}")]
    Configuration(String),

    /// Unexpected HTTP status code
    #[error("Unexpected status code {status} | URL: {url}")]
    Status {
        status: i32,
        url: String
    },

    /// Response decoded fine but has a different shape than expected
    #[error("Malformed response from {route}: {message}")]
    Malformed {
        route: String,
        message: String
    },

    #[error("Failed to fetch data: {0}")]
    Minreq(#[from] minreq::Error),

    #[error("Failed to decode json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to build request URL: {0}")]
    Url(#[from] url::ParseError)
}

impl Error {
    #[inline]
    pub(crate) fn malformed(route: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Malformed {
            route: route.into(),
            message: message.into()
        }
    }

    /// Whether this error is an HTTP 404
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
