use serde::{Serialize, Deserialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub chat_link: Option<String>,
    pub icon: Option<String>,
    pub description: Option<String>,

    #[serde(rename = "type")]
    pub kind: Option<String>,

    pub rarity: Option<String>,
    pub level: Option<u32>,
    pub vendor_value: Option<u64>,
    pub default_skin: Option<u32>,

    #[serde(default)]
    pub flags: Vec<String>,

    #[serde(default)]
    pub game_types: Vec<String>,

    #[serde(default)]
    pub restrictions: Vec<String>,

    pub upgrades_into: Option<Vec<ItemUpgrade>>,
    pub upgrades_from: Option<Vec<ItemUpgrade>>,

    /// Type specific details, shape depends on `kind`
    pub details: Option<Value>
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemUpgrade {
    pub upgrade: String,
    pub item_id: u32
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStat {
    pub id: u32,
    pub name: String,

    #[serde(default)]
    pub attributes: Vec<ItemStatAttribute>
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStatAttribute {
    pub attribute: String,
    pub multiplier: f64,
    pub value: i64
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skin {
    pub id: u32,
    pub name: String,

    #[serde(rename = "type")]
    pub kind: Option<String>,

    #[serde(default)]
    pub flags: Vec<String>,

    #[serde(default)]
    pub restrictions: Vec<String>,

    pub icon: Option<String>,
    pub rarity: Option<String>,
    pub description: Option<String>,
    pub details: Option<Value>
}

/// Entry of the `colors` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dye {
    pub id: u32,
    pub name: String,
    pub base_rgb: Option<[u8; 3]>,
    pub cloth: Option<DyeMaterial>,
    pub leather: Option<DyeMaterial>,
    pub metal: Option<DyeMaterial>,
    pub fur: Option<DyeMaterial>,

    /// Item that unlocks the dye
    pub item: Option<u32>,

    #[serde(default)]
    pub categories: Vec<String>
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DyeMaterial {
    pub brightness: i32,
    pub contrast: f64,
    pub hue: i32,
    pub saturation: f64,
    pub lightness: f64,
    pub rgb: [u8; 3]
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mini {
    pub id: u32,
    pub name: String,
    pub unlock: Option<String>,
    pub icon: Option<String>,
    pub order: Option<u32>,
    pub item_id: Option<u32>
}

/// Entry of the `materials` endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialCategory {
    pub id: u32,
    pub name: String,

    #[serde(default)]
    pub items: Vec<u32>,

    pub order: Option<u32>
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,

    #[serde(rename = "type")]
    pub kind: Option<String>,

    pub output_item_id: Option<u32>,
    pub output_item_count: Option<u32>,
    pub time_to_craft_ms: Option<u64>,

    #[serde(default)]
    pub disciplines: Vec<String>,

    pub min_rating: Option<u32>,

    #[serde(default)]
    pub flags: Vec<String>,

    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,

    pub chat_link: Option<String>
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub item_id: Option<u32>,
    pub id: Option<u32>,

    #[serde(rename = "type")]
    pub kind: Option<String>,

    pub count: u32
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outfit {
    pub id: u32,
    pub name: String,
    pub icon: Option<String>,

    #[serde(default)]
    pub unlock_items: Vec<u32>
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Title {
    pub id: u32,
    pub name: String,
    pub achievement: Option<u32>,

    #[serde(default)]
    pub achievements: Vec<u32>,

    pub ap_required: Option<u32>
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Finisher {
    pub id: u32,
    pub name: String,
    pub unlock_details: Option<String>,

    #[serde(default)]
    pub unlock_items: Vec<u32>,

    pub order: Option<u32>,
    pub icon: Option<String>
}

super::plain_record!(
    Item, ItemStat, Skin, Dye, Mini, MaterialCategory,
    Recipe, Outfit, Title, Finisher
);
