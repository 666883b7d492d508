pub mod consts;
pub mod error;
pub mod network;
pub mod dispatch;
pub mod registry;
pub mod records;
pub mod pool;
pub mod api;

#[cfg(feature = "functions")]
pub mod functions;

pub use error::Error;

#[cfg(test)]
mod tests;

lazy_static::lazy_static! {
    /// Requests timeout in seconds
    ///
    /// Read once from the `GW2API_REQUESTS_TIMEOUT` environment variable
    pub static ref REQUESTS_TIMEOUT: u64 = std::env::var(consts::REQUESTS_TIMEOUT_VARIABLE)
        .ok()
        .and_then(|timeout| timeout.trim().parse().ok())
        .unwrap_or(consts::DEFAULT_REQUESTS_TIMEOUT);
}

pub mod prelude {
    pub use super::consts::*;
    pub use super::error::Error;
    pub use super::network::{Connection, Transport, MinreqTransport};
    pub use super::dispatch::Fetched;
    pub use super::dispatch::query::{Id, Query, IntoQuery, IntoId};
    pub use super::records::prelude::*;
    pub use super::api::global::GlobalApi;
    pub use super::api::account::{AccountApi, AccountCache, Entry, GameMode, BuildLine};

    #[cfg(feature = "tradingpost")]
    pub use super::api::tradingpost::{TradingPost, ExchangeKind};

    #[cfg(feature = "functions")]
    pub use super::functions::{EmblemLayer, RecipeSearch};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
