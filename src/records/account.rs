use serde::{Serialize, Deserialize};
use serde_json::Value;

use crate::dispatch::query::Id;
use crate::error::Error;
use crate::network::Connection;

use super::{Record, RecordKind};

/// Response of the `tokeninfo` endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenInfo {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub permissions: Vec<String>
}

/// Response of the `account` endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountInfo {
    pub id: String,
    pub name: String,
    pub world: u32,

    #[serde(default)]
    pub guilds: Vec<String>,

    #[serde(default)]
    pub guild_leader: Vec<String>,

    pub created: Option<String>,

    #[serde(default)]
    pub access: Vec<String>,

    pub commander: Option<bool>,
    pub fractal_level: Option<u32>
}

/// Characters are identified by their names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub race: String,
    pub gender: String,
    pub profession: String,
    pub level: u32,
    pub guild: Option<String>,
    pub age: Option<u64>,
    pub created: Option<String>,
    pub deaths: Option<u32>,
    pub title: Option<u32>,
    pub crafting: Option<Vec<Value>>,
    pub equipment: Option<Vec<Value>>,
    pub bags: Option<Vec<Value>>,
    pub training: Option<Vec<Value>>
}

impl Record for Character {
    const KIND: RecordKind = RecordKind::Character;

    #[inline]
    fn from_json(json: Value, _: &Connection) -> Result<Self, Error> {
        Ok(serde_json::from_value(json)?)
    }

    #[inline]
    fn key(&self) -> Id {
        Id::from(self.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency {
    pub id: u32,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub order: Option<u32>
}

/// Entry of the `account/wallet` endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalletBalance {
    pub id: u32,
    pub value: u64
}

/// Currency with the amount the account owns
///
/// `count` is `None` for currencies the account never had
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalletEntry {
    #[serde(flatten)]
    pub currency: Currency,

    pub count: Option<u64>
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HomeCat {
    pub id: u32,
    pub hint: Option<String>
}

/// Bank or shared inventory slot
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BankSlot {
    pub id: u32,
    pub count: u32,
    pub charges: Option<u32>,
    pub skin: Option<u32>,
    pub upgrades: Option<Vec<u32>>,
    pub infusions: Option<Vec<u32>>,
    pub binding: Option<String>,
    pub bound_to: Option<String>
}

/// Material storage slot
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialSlot {
    pub id: u32,
    pub category: u32,
    pub count: u32,
    pub binding: Option<String>
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AchievementProgress {
    pub id: u32,
    pub current: Option<u32>,
    pub max: Option<u32>,

    #[serde(default)]
    pub done: bool,

    pub bits: Option<Vec<u32>>,
    pub repeated: Option<u32>,
    pub unlocked: Option<bool>
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MasteryProgress {
    pub id: u32,
    pub level: u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FinisherUnlock {
    pub id: u32,

    #[serde(default)]
    pub permanent: bool,

    pub quantity: Option<u32>
}

super::plain_record!(Currency);

super::keyed!(BankSlot, MaterialSlot, AchievementProgress, MasteryProgress, FinisherUnlock);
