use serde::{Serialize, Deserialize};

use crate::dispatch::{self, Fetched};
use crate::dispatch::query::IntoQuery;
use crate::error::Error;
use crate::network::Connection;
use crate::records::prelude::*;
use crate::registry;

/// Direction of a currency exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExchangeKind {
    /// Coins to gems
    Coins,

    /// Gems to coins
    Gems
}

impl ExchangeKind {
    #[inline]
    pub fn route(&self) -> &'static str {
        match self {
            Self::Coins => "commerce/exchange/coins",
            Self::Gems => "commerce/exchange/gems"
        }
    }
}

/// Unauthenticated client of the trading post endpoints
#[derive(Debug, Clone, Default)]
pub struct TradingPost {
    connection: Connection
}

impl TradingPost {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_connection(connection: Connection) -> Self {
        Self {
            connection
        }
    }

    #[inline]
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Buy and sell orders of the item(s)
    pub fn get_listing(&self, query: impl IntoQuery) -> Result<Fetched<Listing>, Error> {
        let query = query.into_query()?;

        dispatch::dispatch(registry::lookup("listings")?, &self.connection, query)
    }

    /// Best buy and sell offers of the item(s)
    pub fn get_price(&self, query: impl IntoQuery) -> Result<Fetched<Price>, Error> {
        let query = query.into_query()?;

        dispatch::dispatch(registry::lookup("prices")?, &self.connection, query)
    }

    /// Current exchange rate for given amount of coins or gems
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn get_exchange(&self, kind: ExchangeKind, quantity: u64) -> Result<Exchange, Error> {
        self.connection.get(&format!("{}?quantity={quantity}", kind.route()))
    }
}
