use crate::api::account::enrich::distinct;
use crate::dispatch::{self, Fetched};
use crate::dispatch::query::{Id, IntoQuery, Query};
use crate::error::Error;
use crate::network::Connection;
use crate::records::prelude::*;
use crate::registry;

/// Unauthenticated client of the game's catalog endpoints
///
/// Every `get_*` accessor accepts a single id (`12`, `"12"`),
/// a list of ids (`vec![1, 2]`) or `"all"`:
///
/// ```no_run
/// use gw2api_core::prelude::*;
///
/// let api = GlobalApi::new();
///
/// let item = api.get_item(19721)?.one();
/// let items = api.get_item(vec![19721, 24295])?.into_vec();
/// let dyes = api.get_dye("all")?;
/// # Ok::<(), gw2api_core::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct GlobalApi {
    connection: Connection
}

macro_rules! accessors {
    ($($(#[$meta:meta])* $name:ident => $resource:literal, $record:ty;)*) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name(&self, query: impl IntoQuery) -> Result<Fetched<$record>, Error> {
                self.dispatch($resource, query)
            }
        )*
    };
}

impl GlobalApi {
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

    /// Resolve the resource and dispatch the query to it
    ///
    /// The query is converted before the registry lookup,
    /// so unsupported arguments never cause requests
    pub fn dispatch<R: Record>(&self, resource: &str, query: impl IntoQuery) -> Result<Fetched<R>, Error> {
        let query = query.into_query()?;
        let descriptor = registry::lookup(resource)?;

        dispatch::dispatch(descriptor, &self.connection, query)
    }

    accessors! {
        /// https://wiki.guildwars2.com/wiki/API:2/items
        get_item => "items", Item;

        /// https://wiki.guildwars2.com/wiki/API:2/itemstats
        get_item_stat => "itemstats", ItemStat;

        /// https://wiki.guildwars2.com/wiki/API:2/materials
        get_material_category => "materialcategories", MaterialCategory;

        get_skin => "skins", Skin;

        /// https://wiki.guildwars2.com/wiki/API:2/colors
        get_dye => "dyes", Dye;

        get_mini => "minis", Mini;
        get_recipe => "recipes", Recipe;
        get_outfit => "outfits", Outfit;
        get_title => "titles", Title;
        get_finisher => "finishers", Finisher;
        get_legend => "legends", Legend;
        get_dungeon => "dungeons", Dungeon;
        get_raid => "raids", Raid;
        get_skill => "skills", Skill;
        get_profession => "professions", Profession;
        get_race => "races", Race;
        get_pet => "pets", Pet;
        get_mastery => "masteries", Mastery;
        get_currency => "currencies", Currency;
        get_trait => "traits", Trait;

        /// Specializations are built together with their traits,
        /// so every specialization costs one more request
        get_specialization => "specializations", Specialization;

        /// https://wiki.guildwars2.com/wiki/API:2/guild/:id
        get_guild => "guilds", Guild;

        /// Prerequisite upgrades are resolved recursively
        get_guild_upgrade => "guildupgrades", GuildUpgrade;

        get_guild_permission => "guildpermissions", GuildPermission;
        get_achievement => "achievements", Achievement;
        get_achievement_group => "achievementgroups", AchievementGroup;
        get_achievement_category => "achievementcategories", AchievementCategory;
        get_pvp_amulet => "pvpamulets", PvpAmulet;
        get_wvw_objective => "wvwobjectives", WvwObjective;
        get_wvw_match => "wvwmatches", WvwMatch;
    }

    /// Get achievements of today's (or tomorrow's) dailies
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn get_dailies(&self, tomorrow: bool) -> Result<Vec<Achievement>, Error> {
        let route = if tomorrow {
            "achievements/daily/tomorrow"
        } else {
            "achievements/daily"
        };

        let dailies = self.connection.get::<Dailies>(route)?;

        let ids = distinct(dailies.values().flatten().map(|daily| Id::from(daily.id)));

        Ok(self.dispatch("achievements", Query::Ids(ids))?.into_vec())
    }
}
