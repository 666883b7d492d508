use serde::{Serialize, Deserialize};
use serde_json::Value;

use crate::dispatch::{self, query::Id};
use crate::error::Error;
use crate::network::Connection;
use crate::registry;

use super::{Record, RecordKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profession {
    pub id: String,
    pub name: String,
    pub code: Option<u32>,
    pub icon: Option<String>,
    pub icon_big: Option<String>,

    #[serde(default)]
    pub specializations: Vec<u32>,

    pub weapons: Option<Value>,
    pub training: Option<Value>,

    #[serde(default)]
    pub flags: Vec<String>
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Race {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub skills: Vec<u32>
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pet {
    pub id: u32,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,

    #[serde(default)]
    pub skills: Vec<PetSkill>
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PetSkill {
    pub id: u32
}

/// Revenant legend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Legend {
    pub id: String,
    pub code: Option<u32>,
    pub swap: u32,
    pub heal: u32,
    pub elite: u32,

    #[serde(default)]
    pub utilities: Vec<u32>
}

/// Skill, either requested directly or embedded into a [`Trait`]
///
/// Related skills (chains, bundles, toolbelt) are kept as ids
/// and are not fetched when the skill is built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: u32,
    pub name: String,
    pub icon: Option<String>,
    pub chat_link: Option<String>,
    pub description: Option<String>,

    #[serde(rename = "type")]
    pub kind: Option<String>,

    pub weapon_type: Option<String>,
    pub slot: Option<String>,

    #[serde(default)]
    pub professions: Vec<String>,

    pub categories: Option<Vec<String>>,
    pub attunement: Option<String>,
    pub cost: Option<u32>,
    pub dual_wield: Option<String>,
    pub initiative: Option<u32>,
    pub facts: Option<Vec<Value>>,
    pub traited_facts: Option<Vec<Value>>,
    pub flip_skill: Option<u32>,
    pub next_chain: Option<u32>,
    pub prev_chain: Option<u32>,
    pub transform_skills: Option<Vec<u32>>,
    pub bundle_skills: Option<Vec<u32>>,
    pub toolbelt_skill: Option<u32>,

    #[serde(default)]
    pub flags: Vec<String>
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trait {
    pub id: u32,
    pub name: String,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub specialization: u32,
    pub tier: u32,
    pub order: Option<u32>,

    /// `Minor` or `Major`
    pub slot: String,

    pub facts: Option<Vec<Value>>,
    pub traited_facts: Option<Vec<Value>>,

    /// Inline skills, no extra requests are made to build them
    pub skills: Option<Vec<Skill>>
}

/// Specialization line with its traits resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Specialization {
    pub id: u32,
    pub name: String,
    pub profession: String,
    pub elite: bool,
    pub icon: Option<String>,
    pub background: Option<String>,
    pub minors: Vec<Trait>,
    pub majors: Vec<Trait>,
    pub weapon_trait: Option<u32>
}

#[derive(Deserialize)]
struct SpecializationJson {
    id: u32,
    name: String,
    profession: String,

    #[serde(default)]
    elite: bool,

    icon: Option<String>,
    background: Option<String>,

    #[serde(default)]
    minor_traits: Vec<u32>,

    #[serde(default)]
    major_traits: Vec<u32>,

    weapon_trait: Option<u32>
}

impl Record for Specialization {
    const KIND: RecordKind = RecordKind::Specialization;

    #[tracing::instrument(level = "trace", skip_all)]
    fn from_json(json: Value, connection: &Connection) -> Result<Self, Error> {
        let json = serde_json::from_value::<SpecializationJson>(json)?;

        let descriptor = registry::lookup("traits")?;

        // Minor and major traits are requested together
        let ids = json.minor_traits.iter()
            .chain(&json.major_traits)
            .copied()
            .map(Id::from)
            .collect::<Vec<_>>();

        let mut minors = Vec::new();
        let mut majors = Vec::new();

        for spec_trait in dispatch::fetch_batches::<Trait>(descriptor, connection, &ids)? {
            match spec_trait.slot.as_str() {
                "Minor" => minors.push(spec_trait),
                "Major" => majors.push(spec_trait),

                slot => return Err(Error::malformed(
                    descriptor.route,
                    format!("trait {} has unknown slot {slot:?}", spec_trait.id)
                ))
            }
        }

        Ok(Self {
            id: json.id,
            name: json.name,
            profession: json.profession,
            elite: json.elite,
            icon: json.icon,
            background: json.background,
            minors,
            majors,
            weapon_trait: json.weapon_trait
        })
    }

    #[inline]
    fn key(&self) -> Id {
        Id::from(self.id)
    }
}

super::plain_record!(Profession, Race, Pet, Legend, Skill, Trait);
