use std::collections::HashMap;

use serde::{Serialize, Deserialize};
use serde_json::Value;

use crate::consts::MAX_CONCURRENT_BUILDS;
use crate::dispatch::{self, query::Id};
use crate::error::Error;
use crate::network::Connection;
use crate::pool;
use crate::records::prelude::*;
use crate::registry;

use super::AccountApi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Pve,
    Pvp,
    Wvw
}

impl GameMode {
    pub const ALL: [Self; 3] = [Self::Pve, Self::Pvp, Self::Wvw];

    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pve => "pve",
            Self::Pvp => "pvp",
            Self::Wvw => "wvw"
        }
    }
}

impl std::fmt::Display for GameMode {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Specialization line of a character with the major traits it has selected
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildLine {
    pub line: Specialization,
    pub traits: Vec<Trait>
}

#[derive(Deserialize)]
struct LineJson {
    id: u32,

    #[serde(default)]
    traits: Vec<Option<u32>>
}

#[derive(Deserialize)]
struct ModesJson {
    #[serde(default)]
    pve: Vec<Option<LineJson>>,

    #[serde(default)]
    pvp: Vec<Option<LineJson>>,

    #[serde(default)]
    wvw: Vec<Option<LineJson>>
}

impl ModesJson {
    fn take(&mut self, mode: GameMode) -> Vec<LineJson> {
        let lines = match mode {
            GameMode::Pve => &mut self.pve,
            GameMode::Pvp => &mut self.pvp,
            GameMode::Wvw => &mut self.wvw
        };

        std::mem::take(lines).into_iter().flatten().collect()
    }
}

#[derive(Deserialize)]
struct CharacterSpecializations {
    specializations: ModesJson
}

/// Resolve the lines into specializations and pick their selected traits
///
/// Specializations are built concurrently. Lines whose specialization
/// failed to build are left out
#[tracing::instrument(level = "debug", skip_all, fields(lines = lines.len()))]
fn build_lines(connection: &Connection, lines: Vec<LineJson>) -> Result<Vec<BuildLine>, Error> {
    if lines.is_empty() {
        return Ok(Vec::new());
    }

    let descriptor = registry::lookup("specializations")?;

    let ids = lines.iter()
        .map(|line| Id::from(line.id))
        .collect::<Vec<_>>();

    let objects = connection.get::<Vec<Value>>(&dispatch::batch_route(descriptor.route, &ids))?;

    let specializations = pool::build_concurrently::<Specialization>(objects, connection, MAX_CONCURRENT_BUILDS);

    let build = lines.into_iter()
        .filter_map(|line| {
            let Some(spec) = specializations.get(&Id::from(line.id)) else {
                tracing::warn!(id = line.id, "Specialization wasn't built, skipping the line");

                return None;
            };

            let traits = line.traits.iter()
                .flatten()
                .filter_map(|id| spec.majors.iter().find(|major| major.id == *id))
                .cloned()
                .collect();

            Some(BuildLine {
                line: spec.clone(),
                traits
            })
        })
        .collect();

    Ok(build)
}

impl AccountApi {
    fn character_specializations(&self, character: &str) -> Result<ModesJson, Error> {
        self.check_permission("builds")?;

        let json = self.connection.get::<CharacterSpecializations>(&format!("characters/{character}/specializations"))?;

        Ok(json.specializations)
    }

    /// Builds of the character in every game mode
    ///
    /// This is slow: every specialization costs an extra request for its traits
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn get_builds(&self, character: &str) -> Result<HashMap<GameMode, Vec<BuildLine>>, Error> {
        let mut modes = self.character_specializations(character)?;

        let mut builds = HashMap::with_capacity(GameMode::ALL.len());

        for mode in GameMode::ALL {
            builds.insert(mode, build_lines(&self.connection, modes.take(mode))?);
        }

        Ok(builds)
    }

    /// Build of the character in given game mode
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn get_build(&self, character: &str, mode: GameMode) -> Result<Vec<BuildLine>, Error> {
        let mut modes = self.character_specializations(character)?;

        build_lines(&self.connection, modes.take(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_lines_are_skipped() -> anyhow::Result<()> {
        let mut modes = serde_json::from_value::<CharacterSpecializations>(serde_json::json!({
            "specializations": {
                "pve": [{ "id": 41, "traits": [232, null, 226] }, null],
                "pvp": []
            }
        }))?.specializations;

        let pve = modes.take(GameMode::Pve);

        assert_eq!(pve.len(), 1);
        assert_eq!(pve[0].traits, [Some(232), None, Some(226)]);

        assert!(modes.take(GameMode::Pvp).is_empty());
        assert!(modes.take(GameMode::Wvw).is_empty());

        Ok(())
    }

    #[test]
    fn game_modes_serialize_lowercase() -> anyhow::Result<()> {
        assert_eq!(serde_json::to_value(GameMode::Wvw)?, "wvw");
        assert_eq!(GameMode::Pve.to_string(), "pve");

        Ok(())
    }
}
