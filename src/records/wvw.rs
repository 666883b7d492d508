use serde::{Serialize, Deserialize};
use serde_json::Value;

/// WvW objective
///
/// Objectives are inconsistent about which keys they have,
/// so everything except `id` and `name` is optional
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WvwObjective {
    pub id: String,
    pub name: String,
    pub sector_id: Option<u32>,

    #[serde(rename = "type")]
    pub kind: Option<String>,

    pub map_type: Option<String>,
    pub map_id: Option<u32>,
    pub upgrade_id: Option<u32>,
    pub coord: Option<Vec<f64>>,
    pub label_coord: Option<Vec<f64>>,
    pub marker: Option<String>,
    pub chat_link: Option<String>
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WvwMatch {
    pub id: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub scores: Option<Value>,
    pub worlds: Option<Value>,
    pub all_worlds: Option<Value>,
    pub deaths: Option<Value>,
    pub kills: Option<Value>,
    pub victory_points: Option<Value>,

    #[serde(default)]
    pub maps: Vec<Value>
}

super::plain_record!(WvwObjective, WvwMatch);
