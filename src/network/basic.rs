use serde_json::Value;

use super::Transport;
use crate::error::Error;

/// Blocking transport based on `minreq`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinreqTransport {
    /// Requests timeout in seconds
    pub timeout: u64
}

impl Default for MinreqTransport {
    #[inline]
    fn default() -> Self {
        Self {
            timeout: *crate::REQUESTS_TIMEOUT
        }
    }
}

impl Transport for MinreqTransport {
    #[tracing::instrument(level = "trace", skip(headers))]
    fn fetch_json(&self, url: &str, headers: &[(&str, &str)]) -> Result<Value, Error> {
        let mut request = minreq::get(url)
            .with_timeout(self.timeout);

        for (name, value) in headers {
            request = request.with_header(*name, *value);
        }

        let response = request.send()?;

        match response.status_code {
            200..=299 => Ok(response.json()?),

            404 => Err(Error::NotFound {
                url: url.to_string()
            }),

            403 => Err(Error::Auth {
                url: url.to_string()
            }),

            status => Err(Error::Status {
                status,
                url: url.to_string()
            })
        }
    }
}
