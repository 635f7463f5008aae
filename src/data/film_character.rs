use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DeleteResult, EntityTrait,
    QueryFilter,
};

use crate::error::data::DataError;

/// Repository for the film-appearance join table.
pub struct FilmCharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FilmCharacterRepository<'a, C> {
    /// Creates a new instance of [`FilmCharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a character's appearance in a film
    ///
    /// Both endpoints must exist or the insert fails with
    /// [`DataError::ConstraintViolation`].
    pub async fn create(
        &self,
        film_id: i32,
        character_id: i32,
    ) -> Result<entity::film_character::Model, DataError> {
        let appearance = entity::film_character::ActiveModel {
            film_id: ActiveValue::Set(film_id),
            character_id: ActiveValue::Set(character_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(appearance.insert(self.db).await?)
    }

    pub async fn get(
        &self,
        appearance_id: i32,
    ) -> Result<Option<entity::film_character::Model>, DataError> {
        Ok(entity::prelude::FilmCharacter::find_by_id(appearance_id)
            .one(self.db)
            .await?)
    }

    /// Lists the characters appearing in a film
    pub async fn list_for_film(
        &self,
        film_id: i32,
    ) -> Result<Vec<entity::film_character::Model>, DataError> {
        Ok(entity::prelude::FilmCharacter::find()
            .filter(entity::film_character::Column::FilmId.eq(film_id))
            .all(self.db)
            .await?)
    }

    /// Lists the films a character appears in
    pub async fn list_for_character(
        &self,
        character_id: i32,
    ) -> Result<Vec<entity::film_character::Model>, DataError> {
        Ok(entity::prelude::FilmCharacter::find()
            .filter(entity::film_character::Column::CharacterId.eq(character_id))
            .all(self.db)
            .await?)
    }

    /// Removes an appearance link
    pub async fn delete(&self, appearance_id: i32) -> Result<DeleteResult, DataError> {
        Ok(entity::prelude::FilmCharacter::delete_by_id(appearance_id)
            .exec(self.db)
            .await?)
    }
}
