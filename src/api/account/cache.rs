use crate::records::prelude::*;

use super::enrich::Entry;

/// Nullable slots of a storage (bank, shared inventory)
pub type Slots<E, R> = Vec<Option<Entry<E, R>>>;

/// Last fetched value of every cached account collection
///
/// Filled lazily by the [`AccountApi`](super::AccountApi) accessors,
/// `None` means the collection wasn't requested yet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountCache {
    pub bank: Option<Slots<BankSlot, Item>>,
    pub inventory: Option<Slots<BankSlot, Item>>,
    pub materials: Option<Vec<Entry<MaterialSlot, Item>>>,
    pub achievements: Option<Vec<Entry<AchievementProgress, Achievement>>>,
    pub masteries: Option<Vec<Entry<MasteryProgress, Mastery>>>,
    pub finishers: Option<Vec<Entry<FinisherUnlock, Finisher>>>,

    pub recipes: Option<Vec<Recipe>>,
    pub titles: Option<Vec<Title>>,
    pub outfits: Option<Vec<Outfit>>,
    pub dyes: Option<Vec<Dye>>,
    pub skins: Option<Vec<Skin>>,
    pub minis: Option<Vec<Mini>>,
    pub characters: Option<Vec<Character>>,

    /// Names of cleared raid encounters
    pub raids: Option<Vec<String>>,

    /// Names of cleared dungeon paths
    pub dungeons: Option<Vec<String>>,

    pub wallet: Option<Vec<WalletEntry>>,
    pub trade_history: Option<TradeHistory>,
    pub pvp_stats: Option<PvpStats>
}

impl AccountCache {
    #[inline]
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
