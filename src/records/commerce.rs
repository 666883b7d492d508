use serde::{Serialize, Deserialize};

/// Trading post order book of an item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Listing {
    pub id: u32,

    #[serde(default)]
    pub buys: Vec<ListingEntry>,

    #[serde(default)]
    pub sells: Vec<ListingEntry>
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListingEntry {
    /// Amount of listings at this price
    pub listings: u32,

    pub unit_price: u64,
    pub quantity: u64
}

/// Best buy and sell offers of an item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Price {
    pub id: u32,

    #[serde(default)]
    pub whitelisted: bool,

    pub buys: PriceEntry,
    pub sells: PriceEntry
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceEntry {
    pub quantity: u64,
    pub unit_price: u64
}

/// Response of `commerce/exchange/coins` and `commerce/exchange/gems`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Exchange {
    pub coins_per_gem: u64,
    pub quantity: u64
}

/// Trading post order, either current or completed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub item_id: u32,
    pub price: u64,
    pub quantity: u32,
    pub created: String,

    /// Only set for completed transactions
    pub purchased: Option<String>
}

/// Every trading post activity of an account
///
/// Lists the API returned empty are `None`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TradeHistory {
    pub buying: Option<Vec<Transaction>>,
    pub selling: Option<Vec<Transaction>>,
    pub bought: Option<Vec<Transaction>>,
    pub sold: Option<Vec<Transaction>>
}

super::plain_record!(Listing, Price);
