use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DeleteResult, EntityTrait,
    QueryFilter,
};

use crate::error::data::DataError;

/// Repository for the user-to-planet favorite join table.
pub struct FavoritePlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoritePlanetRepository<'a, C> {
    /// Creates a new instance of [`FavoritePlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Links a user to a favorited planet
    ///
    /// Both endpoints must exist or the insert fails with
    /// [`DataError::ConstraintViolation`].
    pub async fn create(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<entity::favorite_planet::Model, DataError> {
        let favorite = entity::favorite_planet::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(favorite.insert(self.db).await?)
    }

    pub async fn get(
        &self,
        favorite_id: i32,
    ) -> Result<Option<entity::favorite_planet::Model>, DataError> {
        Ok(entity::prelude::FavoritePlanet::find_by_id(favorite_id)
            .one(self.db)
            .await?)
    }

    /// Lists a user's favorited planets
    pub async fn list_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::favorite_planet::Model>, DataError> {
        Ok(entity::prelude::FavoritePlanet::find()
            .filter(entity::favorite_planet::Column::UserId.eq(user_id))
            .all(self.db)
            .await?)
    }

    /// Removes a favorite link
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DataError> {
        Ok(entity::prelude::FavoritePlanet::delete_by_id(favorite_id)
            .exec(self.db)
            .await?)
    }
}
