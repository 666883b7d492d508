use serde::{Serialize, Deserialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: u32,
    pub name: String,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub requirement: Option<String>,
    pub locked_text: Option<String>,

    #[serde(rename = "type")]
    pub kind: Option<String>,

    #[serde(default)]
    pub flags: Vec<String>,

    #[serde(default)]
    pub tiers: Vec<AchievementTier>,

    #[serde(default)]
    pub prerequisites: Vec<u32>,

    pub rewards: Option<Vec<Value>>,
    pub bits: Option<Vec<Value>>,
    pub point_cap: Option<i64>
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AchievementTier {
    pub count: u32,
    pub points: u32
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AchievementGroup {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub order: Option<u32>,

    #[serde(default)]
    pub categories: Vec<u32>
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AchievementCategory {
    pub id: u32,
    pub name: String,
    pub description: Option<String>,
    pub order: Option<u32>,
    pub icon: Option<String>,

    #[serde(default)]
    pub achievements: Vec<u32>
}

/// Response of `achievements/daily` and `achievements/daily/tomorrow`
///
/// Maps category (`pve`, `pvp`, `wvw`, `fractals`, `special`) to its dailies
pub type Dailies = std::collections::BTreeMap<String, Vec<Daily>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Daily {
    pub id: u32,
    pub level: Option<Value>,
    pub required_access: Option<Value>
}

super::plain_record!(Achievement, AchievementGroup, AchievementCategory);
