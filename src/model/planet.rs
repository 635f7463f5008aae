use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Flat representation of a planet.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlanetDto {
    pub id: i32,
    pub uid: Option<String>,
    pub name: String,
    pub rotation_period: Option<String>,
    pub orbital_period: Option<String>,
    pub diameter: Option<String>,
    pub gravity: Option<String>,
    pub population: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::planet::Model> for PlanetDto {
    fn from(planet: entity::planet::Model) -> Self {
        Self {
            id: planet.id,
            uid: planet.uid,
            name: planet.name,
            rotation_period: planet.rotation_period,
            orbital_period: planet.orbital_period,
            diameter: planet.diameter,
            gravity: planet.gravity,
            population: planet.population,
            climate: planet.climate,
            terrain: planet.terrain,
            surface_water: planet.surface_water,
            created_at: planet.created_at,
            updated_at: planet.updated_at,
        }
    }
}

/// Attributes accepted when creating or updating a planet.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlanetAttributes {
    pub uid: Option<String>,
    pub name: String,
    pub rotation_period: Option<String>,
    pub orbital_period: Option<String>,
    pub diameter: Option<String>,
    pub gravity: Option<String>,
    pub population: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<String>,
}

impl PlanetAttributes {
    /// Convenience constructor for the common name-only case.
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }
}
