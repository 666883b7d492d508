use std::collections::HashMap;

use crate::error::Error;
use crate::records::RecordKind;

/// Where a logical resource lives and what it's built into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceDescriptor {
    /// Key used by the accessors, e.g. `items`
    pub name: &'static str,

    /// Catalog route, e.g. `guild/upgrades`
    pub route: &'static str,

    /// Record type built from every returned json object
    pub record: RecordKind,

    /// Route of the account-owned collection referencing this resource
    pub account_route: Option<&'static str>,

    /// Permission required to read `account_route`
    pub scope: Option<&'static str>
}

impl ResourceDescriptor {
    #[inline]
    const fn catalog(name: &'static str, route: &'static str, record: RecordKind) -> Self {
        Self {
            name,
            route,
            record,
            account_route: None,
            scope: None
        }
    }

    #[inline]
    const fn account(self, account_route: &'static str, scope: &'static str) -> Self {
        Self {
            account_route: Some(account_route),
            scope: Some(scope),
            ..self
        }
    }
}

lazy_static::lazy_static! {
    static ref REGISTRY: HashMap<&'static str, ResourceDescriptor> = {
        use RecordKind::*;

        [
            ResourceDescriptor::catalog("items", "items", Item),
            ResourceDescriptor::catalog("itemstats", "itemstats", ItemStat),
            ResourceDescriptor::catalog("materialcategories", "materials", MaterialCategory),
            ResourceDescriptor::catalog("professions", "professions", Profession),
            ResourceDescriptor::catalog("races", "races", Race),
            ResourceDescriptor::catalog("pets", "pets", Pet),
            ResourceDescriptor::catalog("legends", "legends", Legend),
            ResourceDescriptor::catalog("skills", "skills", Skill),
            ResourceDescriptor::catalog("specializations", "specializations", Specialization),
            ResourceDescriptor::catalog("traits", "traits", Trait),
            ResourceDescriptor::catalog("currencies", "currencies", Currency),
            ResourceDescriptor::catalog("pvpamulets", "pvp/amulets", PvpAmulet),
            ResourceDescriptor::catalog("listings", "commerce/listings", Listing),
            ResourceDescriptor::catalog("prices", "commerce/prices", Price),
            ResourceDescriptor::catalog("guildupgrades", "guild/upgrades", GuildUpgrade),
            ResourceDescriptor::catalog("guildpermissions", "guild/permissions", GuildPermission),
            ResourceDescriptor::catalog("guilds", "guild", Guild),
            ResourceDescriptor::catalog("achievementgroups", "achievements/groups", AchievementGroup),
            ResourceDescriptor::catalog("achievementcategories", "achievements/categories", AchievementCategory),
            ResourceDescriptor::catalog("wvwobjectives", "wvw/objectives", WvwObjective),
            ResourceDescriptor::catalog("wvwmatches", "wvw/matches", WvwMatch),

            ResourceDescriptor::catalog("pvpgames", "pvp/games", PvpMatch)
                .account("pvp/games", "pvp"),

            // Account collections
            ResourceDescriptor::catalog("bank", "items", Item)
                .account("account/bank", "inventories"),

            ResourceDescriptor::catalog("inventory", "items", Item)
                .account("account/inventory", "inventories"),

            ResourceDescriptor::catalog("materials", "items", Item)
                .account("account/materials", "inventories"),

            ResourceDescriptor::catalog("achievements", "achievements", Achievement)
                .account("account/achievements", "progression"),

            ResourceDescriptor::catalog("masteries", "masteries", Mastery)
                .account("account/masteries", "progression"),

            ResourceDescriptor::catalog("titles", "titles", Title)
                .account("account/titles", "progression"),

            ResourceDescriptor::catalog("raids", "raids", Raid)
                .account("account/raids", "progression"),

            ResourceDescriptor::catalog("dungeons", "dungeons", Dungeon)
                .account("account/dungeons", "progression"),

            ResourceDescriptor::catalog("finishers", "finishers", Finisher)
                .account("account/finishers", "unlocks"),

            ResourceDescriptor::catalog("recipes", "recipes", Recipe)
                .account("account/recipes", "unlocks"),

            ResourceDescriptor::catalog("outfits", "outfits", Outfit)
                .account("account/outfits", "unlocks"),

            ResourceDescriptor::catalog("dyes", "colors", Dye)
                .account("account/dyes", "unlocks"),

            ResourceDescriptor::catalog("skins", "skins", Skin)
                .account("account/skins", "unlocks"),

            ResourceDescriptor::catalog("minis", "minis", Mini)
                .account("account/minis", "unlocks"),

            ResourceDescriptor::catalog("characters", "characters", Character)
                .account("characters", "characters")
        ]
        .into_iter()
        .map(|descriptor| (descriptor.name, descriptor))
        .collect()
    };
}

/// Find resource descriptor by its logical name
///
/// Unknown names are a wiring defect and fail with [`Error::Configuration`]
#[inline]
pub fn lookup(name: &str) -> Result<&'static ResourceDescriptor, Error> {
    REGISTRY.get(name).ok_or_else(|| Error::Configuration(format!("no resource registered under {name:?}")))
}

/// Iterate over every registered resource
#[inline]
pub fn descriptors() -> impl Iterator<Item = &'static ResourceDescriptor> {
    REGISTRY.values()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_differ_from_names() {
        assert_eq!(lookup("dyes").unwrap().route, "colors");
        assert_eq!(lookup("guildupgrades").unwrap().route, "guild/upgrades");
        assert_eq!(lookup("achievementcategories").unwrap().route, "achievements/categories");
        assert_eq!(lookup("bank").unwrap().account_route, Some("account/bank"));
    }

    #[test]
    fn unknown_names_are_misconfiguration() {
        assert!(matches!(lookup("quaggans"), Err(Error::Configuration(_))));
    }

    #[test]
    fn account_collections_require_scope() {
        for descriptor in descriptors() {
            assert_eq!(descriptor.account_route.is_some(), descriptor.scope.is_some(), "{}", descriptor.name);
        }
    }
}
