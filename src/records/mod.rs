use serde_json::Value;

use crate::dispatch::query::Id;
use crate::error::Error;
use crate::network::Connection;

/// Implement [`Record`] for types that are plain serde copies of the json
macro_rules! plain_record {
    ($($record:ident),* $(,)?) => {
        $(
            impl crate::records::Record for $record {
                const KIND: crate::records::RecordKind = crate::records::RecordKind::$record;

                #[inline]
                fn from_json(json: serde_json::Value, _: &crate::network::Connection) -> Result<Self, crate::error::Error> {
                    Ok(serde_json::from_value(json)?)
                }

                #[inline]
                fn key(&self) -> crate::dispatch::query::Id {
                    crate::dispatch::query::Id::from(self.id.clone())
                }
            }
        )*
    };
}

macro_rules! keyed {
    ($($entry:ident),* $(,)?) => {
        $(
            impl crate::records::Keyed for $entry {
                #[inline]
                fn key(&self) -> crate::dispatch::query::Id {
                    crate::dispatch::query::Id::from(self.id.clone())
                }
            }
        )*
    };
}

pub(crate) use plain_record;
pub(crate) use keyed;

pub mod account;
pub mod achievements;
pub mod commerce;
pub mod guild;
pub mod items;
pub mod professions;
pub mod pve;
pub mod pvp;
pub mod wvw;

pub mod prelude {
    pub use super::{Record, RecordKind, Keyed};
    pub use super::account::*;
    pub use super::achievements::*;
    pub use super::commerce::*;
    pub use super::guild::*;
    pub use super::items::*;
    pub use super::professions::*;
    pub use super::pve::*;
    pub use super::pvp::*;
    pub use super::wvw::*;
}

/// Every statically declared record type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Achievement,
    AchievementCategory,
    AchievementGroup,
    Character,
    Currency,
    Dungeon,
    Dye,
    Finisher,
    Guild,
    GuildPermission,
    GuildUpgrade,
    Item,
    ItemStat,
    Legend,
    Listing,
    MaterialCategory,
    Mastery,
    Mini,
    Outfit,
    Pet,
    Price,
    Profession,
    PvpAmulet,
    PvpMatch,
    Race,
    Raid,
    Recipe,
    Skill,
    Skin,
    Specialization,
    Title,
    Trait,
    WvwMatch,
    WvwObjective
}

/// Typed value built from one json object returned by the API
pub trait Record: Sized + Clone + Send {
    const KIND: RecordKind;

    /// Build the record, fetching related records if the type embeds them
    fn from_json(json: Value, connection: &Connection) -> Result<Self, Error>;

    /// Identity used to match the record with the id it was requested by
    fn key(&self) -> Id;
}

/// Partial entry that references a record by id
pub trait Keyed {
    fn key(&self) -> Id;
}

/// Bare ids reference themselves
impl Keyed for Id {
    #[inline]
    fn key(&self) -> Id {
        self.clone()
    }
}
