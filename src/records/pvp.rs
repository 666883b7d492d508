use std::collections::HashMap;

use serde::{Serialize, Deserialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PvpAmulet {
    pub id: u32,
    pub name: String,
    pub icon: Option<String>,

    #[serde(default)]
    pub attributes: HashMap<String, i64>
}

/// Entry of the `pvp/games` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PvpMatch {
    pub id: String,
    pub map_id: Option<u32>,
    pub started: Option<String>,
    pub ended: Option<String>,
    pub result: Option<String>,
    pub team: Option<String>,
    pub profession: Option<String>,
    pub rating_type: Option<String>,
    pub rating_change: Option<i32>,
    pub season: Option<String>,
    pub scores: Option<Value>
}

/// Response of the `pvp/stats` endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PvpStats {
    pub pvp_rank: u32,
    pub pvp_rank_points: Option<u32>,
    pub pvp_rank_rollovers: Option<u32>,
    pub aggregate: PvpOutcomes,

    /// Outcomes per profession name
    #[serde(default)]
    pub professions: HashMap<String, PvpOutcomes>,

    /// Outcomes per ladder (`ranked`, `unranked`, ...)
    #[serde(default)]
    pub ladders: HashMap<String, PvpOutcomes>
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PvpOutcomes {
    #[serde(default)]
    pub wins: u32,

    #[serde(default)]
    pub losses: u32,

    #[serde(default)]
    pub desertions: u32,

    #[serde(default)]
    pub byes: u32,

    #[serde(default)]
    pub forfeits: u32
}

super::plain_record!(PvpAmulet, PvpMatch);
