use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Flat representation of a character.
///
/// Homeworld and species appear only as foreign-key ids; no nested
/// objects are embedded.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CharacterDto {
    pub id: i32,
    pub uid: Option<String>,
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub homeworld_id: Option<i32>,
    pub species_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::character::Model> for CharacterDto {
    fn from(character: entity::character::Model) -> Self {
        Self {
            id: character.id,
            uid: character.uid,
            name: character.name,
            height: character.height,
            mass: character.mass,
            hair_color: character.hair_color,
            skin_color: character.skin_color,
            eye_color: character.eye_color,
            birth_year: character.birth_year,
            gender: character.gender,
            homeworld_id: character.homeworld_id,
            species_id: character.species_id,
            created_at: character.created_at,
            updated_at: character.updated_at,
        }
    }
}

/// Attributes accepted when creating or updating a character.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CharacterAttributes {
    pub uid: Option<String>,
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub homeworld_id: Option<i32>,
    pub species_id: Option<i32>,
}

impl CharacterAttributes {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }
}
