use std::collections::{HashMap, HashSet};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::dispatch::{self, Fetched};
use crate::dispatch::query::{Id, IntoQuery};
use crate::error::Error;
use crate::network::Connection;
use crate::records::prelude::*;
use crate::registry::{self, ResourceDescriptor};

pub mod enrich;
pub mod cache;
pub mod builds;

pub use enrich::{Entry, Collection};
pub use cache::{AccountCache, Slots};
pub use builds::{GameMode, BuildLine};

/// Take the cached value or fetch and cache it
fn cached<T>(slot: &mut Option<T>, fetch: impl FnOnce() -> Result<T, Error>) -> Result<&T, Error> {
    let value = match slot.take() {
        Some(value) => value,
        None => fetch()?
    };

    Ok(slot.insert(value))
}

fn account_route(descriptor: &ResourceDescriptor) -> &'static str {
    descriptor.account_route.unwrap_or(descriptor.route)
}

/// Fetch the account collection and attach records to its slots
fn fetch_slots<E, R>(descriptor: &ResourceDescriptor, connection: &Connection) -> Result<Slots<E, R>, Error>
where
    E: Keyed + DeserializeOwned,
    R: Record
{
    let route = account_route(descriptor);
    let raw = connection.get::<Vec<Value>>(route)?;

    enrich::enrich_entries(descriptor, connection, raw)
}

/// Same as [`fetch_slots`] for collections without empty slots
fn fetch_entries<E, R>(descriptor: &ResourceDescriptor, connection: &Connection) -> Result<Vec<Entry<E, R>>, Error>
where
    E: Keyed + DeserializeOwned,
    R: Record
{
    Ok(fetch_slots::<E, R>(descriptor, connection)?.into_iter().flatten().collect())
}

/// Fetch the account collection of bare ids and resolve them
fn fetch_records<R: Record>(descriptor: &ResourceDescriptor, connection: &Connection) -> Result<Vec<R>, Error> {
    let route = account_route(descriptor);
    let raw = connection.get::<Vec<Value>>(route)?;

    enrich::enrich::<Id, R>(descriptor, connection, raw)?.into_records(route)
}

#[inline]
fn non_empty<T>(list: Vec<T>) -> Option<Vec<T>> {
    if list.is_empty() {
        None
    } else {
        Some(list)
    }
}

macro_rules! enriched {
    ($($(#[$meta:meta])* $name:ident => $resource:literal, $field:ident: [$item:ty], $fetch:ident;)*) => {
        $(
            $(#[$meta])*
            #[tracing::instrument(level = "debug", skip(self))]
            pub fn $name(&mut self) -> Result<&[$item], Error> {
                let descriptor = self.require($resource)?;

                cached(&mut self.cache.$field, || $fetch(descriptor, &self.connection))
                    .map(Vec::as_slice)
            }
        )*
    };
}

/// Authenticated client of the account endpoints
///
/// Construction performs two requests: `tokeninfo` for the permissions
/// of the api key and `account/` for the basic account info. Every accessor
/// verifies the permission it needs before making any request
/// and fails with [`Error::Permission`] if the key doesn't have it.
///
/// Collections are cached after the first call, use [`AccountApi::clear_cache`]
/// to fetch them again
#[derive(Debug, Clone)]
pub struct AccountApi {
    connection: Connection,
    permissions: HashSet<String>,
    info: AccountInfo,
    cache: AccountCache
}

impl AccountApi {
    /// Connect to the official API with given api key
    #[inline]
    pub fn new(api_key: impl AsRef<str>) -> Result<Self, Error> {
        Self::with_connection(Connection::default().with_api_key(api_key))
    }

    #[tracing::instrument(level = "debug")]
    pub fn with_connection(connection: Connection) -> Result<Self, Error> {
        let token = connection.get::<TokenInfo>("tokeninfo")?;
        let info = connection.get::<AccountInfo>("account/")?;

        tracing::debug!(account = %info.name, permissions = ?token.permissions, "Account api initialized");

        Ok(Self {
            permissions: token.permissions.into_iter().collect(),
            info,
            connection,
            cache: AccountCache::default()
        })
    }

    #[inline]
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    #[inline]
    pub fn permissions(&self) -> &HashSet<String> {
        &self.permissions
    }

    #[inline]
    pub fn has_permission(&self, scope: &str) -> bool {
        self.permissions.contains(scope)
    }

    /// Fail with [`Error::Permission`] if the api key has no such scope
    pub fn check_permission(&self, scope: &str) -> Result<(), Error> {
        if self.has_permission(scope) {
            Ok(())
        } else {
            tracing::debug!(scope, "Missing permission");

            Err(Error::Permission(scope.to_string()))
        }
    }

    #[inline]
    pub fn info(&self) -> &AccountInfo {
        &self.info
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.info.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.info.name
    }

    #[inline]
    pub fn world(&self) -> u32 {
        self.info.world
    }

    #[inline]
    pub fn guilds(&self) -> &[String] {
        &self.info.guilds
    }

    #[inline]
    pub fn cache(&self) -> &AccountCache {
        &self.cache
    }

    #[inline]
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Lookup the account collection and check its scope
    fn require(&self, resource: &str) -> Result<&'static ResourceDescriptor, Error> {
        let descriptor = registry::lookup(resource)?;

        let Some(scope) = descriptor.scope else {
            return Err(Error::Configuration(format!("resource {resource:?} is not an account collection")));
        };

        self.check_permission(scope)?;

        Ok(descriptor)
    }

    enriched! {
        /// https://wiki.guildwars2.com/wiki/API:2/account/bank
        get_bank => "bank", bank: [Option<Entry<BankSlot, Item>>], fetch_slots;

        /// Shared inventory slots
        get_inventory => "inventory", inventory: [Option<Entry<BankSlot, Item>>], fetch_slots;

        get_materials => "materials", materials: [Entry<MaterialSlot, Item>], fetch_entries;
        get_achievements => "achievements", achievements: [Entry<AchievementProgress, Achievement>], fetch_entries;
        get_masteries => "masteries", masteries: [Entry<MasteryProgress, Mastery>], fetch_entries;
        get_finishers => "finishers", finishers: [Entry<FinisherUnlock, Finisher>], fetch_entries;

        get_recipes => "recipes", recipes: [Recipe], fetch_records;
        get_titles => "titles", titles: [Title], fetch_records;
        get_outfits => "outfits", outfits: [Outfit], fetch_records;
        get_dyes => "dyes", dyes: [Dye], fetch_records;
        get_skins => "skins", skins: [Skin], fetch_records;
        get_minis => "minis", minis: [Mini], fetch_records;

        /// Every character of the account, requested by name
        get_characters => "characters", characters: [Character], fetch_records;
    }

    /// Names of the raid encounters cleared this week
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn get_raids(&mut self) -> Result<&[String], Error> {
        let descriptor = self.require("raids")?;

        cached(&mut self.cache.raids, || self.connection.get(account_route(descriptor)))
            .map(Vec::as_slice)
    }

    /// Names of the dungeon paths cleared today
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn get_dungeons(&mut self) -> Result<&[String], Error> {
        let descriptor = self.require("dungeons")?;

        cached(&mut self.cache.dungeons, || self.connection.get(account_route(descriptor)))
            .map(Vec::as_slice)
    }

    /// Names of the resource nodes unlocked in the home instance
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn get_nodes(&self) -> Result<Vec<String>, Error> {
        self.check_permission("progression")?;

        self.connection.get("account/home/nodes")
    }

    /// Cats unlocked in the home instance
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn get_cats(&self) -> Result<Vec<HomeCat>, Error> {
        self.check_permission("progression")?;

        self.connection.get("account/home/cats")
    }

    /// Every currency of the game with the amount the account owns
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn get_wallet(&mut self) -> Result<&[WalletEntry], Error> {
        self.check_permission("wallet")?;

        let connection = &self.connection;

        cached(&mut self.cache.wallet, || {
            let currencies = connection.get::<Vec<Currency>>("currencies?ids=all")?;

            let balances = connection.get::<Vec<WalletBalance>>("account/wallet")?
                .into_iter()
                .map(|balance| (balance.id, balance.value))
                .collect::<HashMap<_, _>>();

            Ok(currencies.into_iter()
                .map(|currency| WalletEntry {
                    count: balances.get(&currency.id).copied(),
                    currency
                })
                .collect())
        }).map(Vec::as_slice)
    }

    /// Current and completed trading post transactions
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn get_trade_history(&mut self) -> Result<&TradeHistory, Error> {
        self.check_permission("tradingpost")?;

        let connection = &self.connection;

        cached(&mut self.cache.trade_history, || {
            let transactions = |route: &str| -> Result<Option<Vec<Transaction>>, Error> {
                Ok(non_empty(connection.get(route)?))
            };

            Ok(TradeHistory {
                buying: transactions("commerce/transactions/current/buys")?,
                selling: transactions("commerce/transactions/current/sells")?,
                bought: transactions("commerce/transactions/history/buys")?,
                sold: transactions("commerce/transactions/history/sells")?
            })
        })
    }

    /// PvP games played by the account
    #[tracing::instrument(level = "debug", skip(self, query))]
    pub fn get_match_results(&self, query: impl IntoQuery) -> Result<Fetched<PvpMatch>, Error> {
        let query = query.into_query()?;
        let descriptor = self.require("pvpgames")?;

        dispatch::dispatch(descriptor, &self.connection, query)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn get_pvp_stats(&mut self) -> Result<&PvpStats, Error> {
        self.check_permission("pvp")?;

        let connection = &self.connection;

        cached(&mut self.cache.pvp_stats, || connection.get("pvp/stats"))
    }

    /// Full details of a guild the account is a member of
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn get_guild(&self, guild_id: &str) -> Result<Guild, Error> {
        self.check_permission("guilds")?;

        dispatch::fetch_one(registry::lookup("guilds")?, &self.connection, &Id::from(guild_id))
    }

    /// Only available to the guild leader
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn get_guild_ranks(&self, guild_id: &str) -> Result<Vec<GuildRank>, Error> {
        self.check_permission("guilds")?;

        self.connection.get(&format!("guild/{guild_id}/ranks"))
    }

    /// Only available to the guild leader
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn get_guild_members(&self, guild_id: &str) -> Result<Vec<GuildMember>, Error> {
        self.check_permission("guilds")?;

        self.connection.get(&format!("guild/{guild_id}/members"))
    }
}
