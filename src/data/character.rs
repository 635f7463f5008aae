use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::{error::data::DataError, model::character::CharacterAttributes};

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new character
    ///
    /// `homeworld_id` and `species_id` may be absent; when present they
    /// must reference existing rows or the insert fails with
    /// [`DataError::ConstraintViolation`].
    pub async fn create(
        &self,
        attrs: CharacterAttributes,
    ) -> Result<entity::character::Model, DataError> {
        let now = Utc::now().naive_utc();
        let character = entity::character::ActiveModel {
            uid: ActiveValue::Set(attrs.uid),
            name: ActiveValue::Set(attrs.name),
            height: ActiveValue::Set(attrs.height),
            mass: ActiveValue::Set(attrs.mass),
            hair_color: ActiveValue::Set(attrs.hair_color),
            skin_color: ActiveValue::Set(attrs.skin_color),
            eye_color: ActiveValue::Set(attrs.eye_color),
            birth_year: ActiveValue::Set(attrs.birth_year),
            gender: ActiveValue::Set(attrs.gender),
            homeworld_id: ActiveValue::Set(attrs.homeworld_id),
            species_id: ActiveValue::Set(attrs.species_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(character.insert(self.db).await?)
    }

    pub async fn get(
        &self,
        character_id: i32,
    ) -> Result<Option<entity::character::Model>, DataError> {
        Ok(entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await?)
    }

    pub async fn get_by_uid(
        &self,
        uid: &str,
    ) -> Result<Option<entity::character::Model>, DataError> {
        Ok(entity::prelude::Character::find()
            .filter(entity::character::Column::Uid.eq(uid))
            .one(self.db)
            .await?)
    }

    pub async fn get_all(&self) -> Result<Vec<entity::character::Model>, DataError> {
        Ok(entity::prelude::Character::find().all(self.db).await?)
    }

    /// Replaces the character's attributes and refreshes `updated_at`
    ///
    /// Returns `Ok(None)` when no character with the given ID exists.
    pub async fn update(
        &self,
        character_id: i32,
        attrs: CharacterAttributes,
    ) -> Result<Option<entity::character::Model>, DataError> {
        let character = match entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await?
        {
            Some(character) => character,
            None => return Ok(None),
        };

        let mut character_am = character.into_active_model();
        character_am.uid = ActiveValue::Set(attrs.uid);
        character_am.name = ActiveValue::Set(attrs.name);
        character_am.height = ActiveValue::Set(attrs.height);
        character_am.mass = ActiveValue::Set(attrs.mass);
        character_am.hair_color = ActiveValue::Set(attrs.hair_color);
        character_am.skin_color = ActiveValue::Set(attrs.skin_color);
        character_am.eye_color = ActiveValue::Set(attrs.eye_color);
        character_am.birth_year = ActiveValue::Set(attrs.birth_year);
        character_am.gender = ActiveValue::Set(attrs.gender);
        character_am.homeworld_id = ActiveValue::Set(attrs.homeworld_id);
        character_am.species_id = ActiveValue::Set(attrs.species_id);
        character_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let character = character_am.update(self.db).await?;

        Ok(Some(character))
    }

    /// Deletes a character
    ///
    /// Favorite links and film appearances owned by the character are
    /// removed by the cascade rules. Returns OK regardless of the
    /// character existing; check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, character_id: i32) -> Result<DeleteResult, DataError> {
        Ok(entity::prelude::Character::delete_by_id(character_id)
            .exec(self.db)
            .await?)
    }
}
