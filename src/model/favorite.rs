use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Flat representation of a user-to-character favorite link.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FavoriteCharacterDto {
    pub id: i32,
    pub user_id: i32,
    pub character_id: i32,
    pub created_at: NaiveDateTime,
}

impl From<entity::favorite_character::Model> for FavoriteCharacterDto {
    fn from(favorite: entity::favorite_character::Model) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            character_id: favorite.character_id,
            created_at: favorite.created_at,
        }
    }
}

/// Flat representation of a user-to-planet favorite link.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FavoritePlanetDto {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: i32,
    pub created_at: NaiveDateTime,
}

impl From<entity::favorite_planet::Model> for FavoritePlanetDto {
    fn from(favorite: entity::favorite_planet::Model) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            planet_id: favorite.planet_id,
            created_at: favorite.created_at,
        }
    }
}

/// Flat representation of a character's appearance in a film.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FilmCharacterDto {
    pub id: i32,
    pub film_id: i32,
    pub character_id: i32,
    pub created_at: NaiveDateTime,
}

impl From<entity::film_character::Model> for FilmCharacterDto {
    fn from(appearance: entity::film_character::Model) -> Self {
        Self {
            id: appearance.id,
            film_id: appearance.film_id,
            character_id: appearance.character_id,
            created_at: appearance.created_at,
        }
    }
}
