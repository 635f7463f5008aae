use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

/// Insert helpers for user rows and favorite links.
pub struct UserContext<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserContext<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert_user(
        &self,
        username: &str,
        email: &str,
    ) -> Result<entity::user::Model, TestError> {
        let now = Utc::now().naive_utc();
        let user = entity::user::ActiveModel {
            name: ActiveValue::Set("Test".to_string()),
            last_name: ActiveValue::Set("User".to_string()),
            username: ActiveValue::Set(username.to_string()),
            email: ActiveValue::Set(email.to_string()),
            password: ActiveValue::Set("hunter2".to_string()),
            is_active: ActiveValue::Set(true),
            subscription_date: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(user.insert(self.db).await?)
    }

    pub async fn insert_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<entity::favorite_character::Model, TestError> {
        let favorite = entity::favorite_character::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(character_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(favorite.insert(self.db).await?)
    }

    pub async fn insert_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<entity::favorite_planet::Model, TestError> {
        let favorite = entity::favorite_planet::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(favorite.insert(self.db).await?)
    }
}
