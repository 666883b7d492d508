use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dungeon {
    pub id: String,

    #[serde(default)]
    pub paths: Vec<InstancePart>
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Raid {
    pub id: String,

    #[serde(default)]
    pub wings: Vec<RaidWing>
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RaidWing {
    pub id: String,

    #[serde(default)]
    pub events: Vec<InstancePart>
}

/// Dungeon path or raid encounter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstancePart {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: String
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mastery {
    pub id: u32,
    pub name: String,
    pub requirement: Option<String>,
    pub order: Option<u32>,
    pub background: Option<String>,
    pub region: Option<String>,

    #[serde(default)]
    pub levels: Vec<MasteryLevel>
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MasteryLevel {
    pub name: String,
    pub description: Option<String>,
    pub instruction: Option<String>,
    pub icon: Option<String>,
    pub point_cost: Option<u32>,
    pub exp_cost: Option<u64>
}

super::plain_record!(Dungeon, Raid, Mastery);
