use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

/// Insert helpers for catalog rows (planets, species, characters, films).
pub struct CatalogContext<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogContext<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert_planet(&self, name: &str) -> Result<entity::planet::Model, TestError> {
        self.insert_planet_with_uid(name, None).await
    }

    pub async fn insert_planet_with_uid(
        &self,
        name: &str,
        uid: Option<&str>,
    ) -> Result<entity::planet::Model, TestError> {
        let now = Utc::now().naive_utc();
        let planet = entity::planet::ActiveModel {
            uid: ActiveValue::Set(uid.map(str::to_string)),
            name: ActiveValue::Set(name.to_string()),
            climate: ActiveValue::Set(Some("arid".to_string())),
            terrain: ActiveValue::Set(Some("desert".to_string())),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(planet.insert(self.db).await?)
    }

    pub async fn insert_species(
        &self,
        name: &str,
        homeworld_id: Option<i32>,
    ) -> Result<entity::species::Model, TestError> {
        let now = Utc::now().naive_utc();
        let species = entity::species::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            classification: ActiveValue::Set(Some("mammal".to_string())),
            designation: ActiveValue::Set(Some("sentient".to_string())),
            homeworld_id: ActiveValue::Set(homeworld_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(species.insert(self.db).await?)
    }

    pub async fn insert_character(
        &self,
        name: &str,
        homeworld_id: Option<i32>,
        species_id: Option<i32>,
    ) -> Result<entity::character::Model, TestError> {
        let now = Utc::now().naive_utc();
        let character = entity::character::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            gender: ActiveValue::Set(Some("male".to_string())),
            homeworld_id: ActiveValue::Set(homeworld_id),
            species_id: ActiveValue::Set(species_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(character.insert(self.db).await?)
    }

    pub async fn insert_film(&self, title: &str) -> Result<entity::film::Model, TestError> {
        let now = Utc::now().naive_utc();
        let film = entity::film::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            director: ActiveValue::Set(Some("George Lucas".to_string())),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(film.insert(self.db).await?)
    }

    pub async fn insert_film_character(
        &self,
        film_id: i32,
        character_id: i32,
    ) -> Result<entity::film_character::Model, TestError> {
        let appearance = entity::film_character::ActiveModel {
            film_id: ActiveValue::Set(film_id),
            character_id: ActiveValue::Set(character_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(appearance.insert(self.db).await?)
    }
}
