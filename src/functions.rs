//! Simple requests which don't need a client

use std::collections::HashSet;

use serde::{Serialize, Deserialize};

use crate::dispatch::{self, query::{IntoQuery, Query}};
use crate::error::Error;
use crate::network::Connection;
use crate::records::items::MaterialCategory;

/// Layer of a guild emblem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmblemLayer {
    Foreground,
    Background
}

impl EmblemLayer {
    #[inline]
    pub fn route(&self) -> &'static str {
        match self {
            Self::Foreground => "emblem/foregrounds",
            Self::Background => "emblem/backgrounds"
        }
    }
}

/// Direction of a recipe search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecipeSearch {
    /// Recipes using the item as an ingredient
    Input,

    /// Recipes producing the item
    Output
}

impl RecipeSearch {
    #[inline]
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Output => "output"
        }
    }
}

/// Commonly used game asset (waypoint icons, map markers and such)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub icon: String
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct World {
    pub id: u32,
    pub name: String,
    pub population: Option<String>
}

/// Emblem layer images, one per color channel
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Emblem {
    pub id: u32,

    #[serde(default)]
    pub layers: Vec<String>
}

#[derive(Deserialize)]
struct Build {
    id: u64
}

/// Current build id of the game
#[tracing::instrument(level = "debug")]
pub fn get_build(connection: &Connection) -> Result<u64, Error> {
    Ok(connection.get::<Build>("build")?.id)
}

#[tracing::instrument(level = "debug")]
pub fn get_assets(connection: &Connection) -> Result<Vec<Asset>, Error> {
    connection.get("files?ids=all")
}

fn material_ids(connection: &Connection) -> Result<HashSet<u32>, Error> {
    let categories = connection.get::<Vec<MaterialCategory>>("materials?ids=all")?;

    Ok(categories.into_iter()
        .flat_map(|category| category.items)
        .collect())
}

/// Check if the item can be stored in the material storage
#[tracing::instrument(level = "debug")]
pub fn is_material(connection: &Connection, item_id: u32) -> Result<bool, Error> {
    Ok(material_ids(connection)?.contains(&item_id))
}

/// Filter out items which can't be stored in the material storage
///
/// Input order is kept
#[tracing::instrument(level = "debug", skip(item_ids))]
pub fn materials_among(connection: &Connection, item_ids: &[u32]) -> Result<Vec<u32>, Error> {
    let materials = material_ids(connection)?;

    Ok(item_ids.iter()
        .copied()
        .filter(|id| materials.contains(id))
        .collect())
}

/// Ids of the recipes using or producing the item
#[tracing::instrument(level = "debug")]
pub fn recipe_search(connection: &Connection, search: RecipeSearch, item_id: u32) -> Result<Vec<u32>, Error> {
    connection.get(&format!("recipes/search?{}={item_id}", search.parameter()))
}

/// Names and populations of the worlds
#[tracing::instrument(level = "debug", skip(query))]
pub fn get_worlds(connection: &Connection, query: impl IntoQuery) -> Result<Vec<World>, Error> {
    let ids = match query.into_query()? {
        Query::Id(id) => id.to_string(),
        Query::IdStr(id) => id,
        Query::All => String::from("all"),

        // Nothing to request
        Query::Ids(ids) if ids.is_empty() => return Ok(Vec::new()),

        Query::Ids(ids) => dispatch::join_ids(&ids)
    };

    connection.get(&format!("worlds?ids={ids}"))
}

/// Images of the guild emblem
///
/// Both layers are requested if no layer is given
#[tracing::instrument(level = "debug")]
pub fn get_emblem(connection: &Connection, id: u32, layer: Option<EmblemLayer>) -> Result<Vec<Emblem>, Error> {
    let layers = match layer {
        Some(layer) => vec![layer],
        None => vec![EmblemLayer::Foreground, EmblemLayer::Background]
    };

    let mut emblems = Vec::with_capacity(layers.len());

    for layer in layers {
        let found = connection.get::<Vec<Emblem>>(&format!("{}?ids={id}", layer.route()))?;

        emblems.extend(found.into_iter().next());
    }

    Ok(emblems)
}

/// Find id of the guild by its name
#[tracing::instrument(level = "debug")]
pub fn get_guild_id(connection: &Connection, name: &str) -> Result<Option<String>, Error> {
    let ids = connection.get::<Vec<String>>(&format!("guild/search?name={name}"))?;

    Ok(ids.into_iter().next())
}
