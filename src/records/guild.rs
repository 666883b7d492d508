use serde::{Serialize, Deserialize};
use serde_json::Value;

use crate::dispatch::{self, query::Id};
use crate::error::Error;
use crate::network::Connection;
use crate::registry;

use super::{Record, RecordKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guild {
    pub id: String,
    pub name: String,
    pub tag: String,
    pub emblem: Option<Value>,

    // Only returned to authenticated members
    pub level: Option<u32>,
    pub motd: Option<String>,
    pub influence: Option<u64>,
    pub aetherium: Option<u64>,
    pub favor: Option<u64>,
    pub resonance: Option<u64>,
    pub member_count: Option<u32>,
    pub member_capacity: Option<u32>
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuildPermission {
    pub id: String,
    pub name: String,
    pub description: Option<String>
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuildRank {
    pub id: String,
    pub order: u32,

    #[serde(default)]
    pub permissions: Vec<String>,

    pub icon: Option<String>
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuildMember {
    pub name: String,
    pub rank: String,
    pub joined: Option<String>
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuildUpgradeCost {
    #[serde(rename = "type")]
    pub kind: String,

    pub name: Option<String>,
    pub count: u32,
    pub item_id: Option<u32>
}

/// Guild upgrade with its prerequisite upgrades resolved recursively
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GuildUpgrade {
    pub id: u32,
    pub name: String,
    pub description: Option<String>,
    pub kind: Option<String>,
    pub icon: Option<String>,
    pub build_time: Option<u32>,
    pub required_level: Option<u32>,
    pub experience: Option<u32>,
    pub prerequisites: Vec<GuildUpgrade>,
    pub costs: Vec<GuildUpgradeCost>,
    pub bag_max_items: Option<u32>,
    pub bag_max_coins: Option<u64>
}

#[derive(Deserialize)]
struct GuildUpgradeJson {
    id: u32,
    name: String,
    description: Option<String>,

    #[serde(rename = "type")]
    kind: Option<String>,

    icon: Option<String>,
    build_time: Option<u32>,
    required_level: Option<u32>,
    experience: Option<u32>,

    #[serde(default)]
    prerequisites: Vec<u32>,

    #[serde(default)]
    costs: Vec<GuildUpgradeCost>,

    bag_max_items: Option<u32>,
    bag_max_coins: Option<u64>
}

impl Record for GuildUpgrade {
    const KIND: RecordKind = RecordKind::GuildUpgrade;

    #[tracing::instrument(level = "trace", skip_all)]
    fn from_json(json: Value, connection: &Connection) -> Result<Self, Error> {
        let json = serde_json::from_value::<GuildUpgradeJson>(json)?;

        let prerequisites = resolve_prerequisites(&json.prerequisites, connection)?;

        Ok(Self {
            id: json.id,
            name: json.name,
            description: json.description,
            kind: json.kind,
            icon: json.icon,
            build_time: json.build_time,
            required_level: json.required_level,
            experience: json.experience,
            prerequisites,
            costs: json.costs,
            bag_max_items: json.bag_max_items,
            bag_max_coins: json.bag_max_coins
        })
    }

    #[inline]
    fn key(&self) -> Id {
        Id::from(self.id)
    }
}

/// Fetch prerequisite upgrades in one batch request
///
/// The API answers 404 to an empty `?ids=` list, which means "no prerequisites"
fn resolve_prerequisites(ids: &[u32], connection: &Connection) -> Result<Vec<GuildUpgrade>, Error> {
    let descriptor = registry::lookup("guildupgrades")?;

    let ids = ids.iter()
        .copied()
        .map(Id::from)
        .collect::<Vec<_>>();

    let route = dispatch::batch_route(descriptor.route, &ids);

    match connection.get_json(&route) {
        Ok(json) => dispatch::records_from_json(&route, json, connection),

        Err(err) if ids.is_empty() && err.is_not_found() => {
            tracing::trace!("Guild upgrade has no prerequisites");

            Ok(Vec::new())
        }

        Err(err) => Err(err)
    }
}

super::plain_record!(Guild, GuildPermission);
