use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Flat representation of a species. The homeworld appears only as
/// `homeworld_id`; no nested planet object is embedded.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpeciesDto {
    pub id: i32,
    pub uid: Option<String>,
    pub name: String,
    pub classification: Option<String>,
    pub designation: Option<String>,
    pub average_height: Option<String>,
    pub skin_colors: Option<String>,
    pub hair_colors: Option<String>,
    pub eye_colors: Option<String>,
    pub average_lifespan: Option<String>,
    pub language: Option<String>,
    pub homeworld_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::species::Model> for SpeciesDto {
    fn from(species: entity::species::Model) -> Self {
        Self {
            id: species.id,
            uid: species.uid,
            name: species.name,
            classification: species.classification,
            designation: species.designation,
            average_height: species.average_height,
            skin_colors: species.skin_colors,
            hair_colors: species.hair_colors,
            eye_colors: species.eye_colors,
            average_lifespan: species.average_lifespan,
            language: species.language,
            homeworld_id: species.homeworld_id,
            created_at: species.created_at,
            updated_at: species.updated_at,
        }
    }
}

/// Attributes accepted when creating or updating a species.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SpeciesAttributes {
    pub uid: Option<String>,
    pub name: String,
    pub classification: Option<String>,
    pub designation: Option<String>,
    pub average_height: Option<String>,
    pub skin_colors: Option<String>,
    pub hair_colors: Option<String>,
    pub eye_colors: Option<String>,
    pub average_lifespan: Option<String>,
    pub language: Option<String>,
    pub homeworld_id: Option<i32>,
}

impl SpeciesAttributes {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }
}
