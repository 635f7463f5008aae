use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::{error::data::DataError, model::user::NewUser};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    ///
    /// New accounts start active with the subscription date set to now.
    /// Duplicate usernames or emails fail with
    /// [`DataError::ConstraintViolation`].
    pub async fn create(&self, attrs: NewUser) -> Result<entity::user::Model, DataError> {
        let now = Utc::now().naive_utc();
        let user = entity::user::ActiveModel {
            name: ActiveValue::Set(attrs.name),
            last_name: ActiveValue::Set(attrs.last_name),
            username: ActiveValue::Set(attrs.username),
            email: ActiveValue::Set(attrs.email),
            password: ActiveValue::Set(attrs.password),
            is_active: ActiveValue::Set(true),
            subscription_date: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(user.insert(self.db).await?)
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::user::Model>, DataError> {
        Ok(entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?)
    }

    pub async fn get_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DataError> {
        Ok(entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?)
    }

    pub async fn get_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::user::Model>, DataError> {
        Ok(entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?)
    }

    pub async fn get_all(&self) -> Result<Vec<entity::user::Model>, DataError> {
        Ok(entity::prelude::User::find().all(self.db).await?)
    }

    /// Replaces the user's attributes and refreshes `updated_at`
    ///
    /// Returns `Ok(None)` when no user with the given ID exists.
    pub async fn update(
        &self,
        user_id: i32,
        attrs: NewUser,
    ) -> Result<Option<entity::user::Model>, DataError> {
        let user = match entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
        {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        user_am.name = ActiveValue::Set(attrs.name);
        user_am.last_name = ActiveValue::Set(attrs.last_name);
        user_am.username = ActiveValue::Set(attrs.username);
        user_am.email = ActiveValue::Set(attrs.email);
        user_am.password = ActiveValue::Set(attrs.password);
        user_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Activates or deactivates the account
    pub async fn set_active(
        &self,
        user_id: i32,
        is_active: bool,
    ) -> Result<Option<entity::user::Model>, DataError> {
        let user = match entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
        {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        user_am.is_active = ActiveValue::Set(is_active);
        user_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Deletes a user
    ///
    /// The user's favorite links are removed by the cascade rules. Returns
    /// OK regardless of the user existing; to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DataError> {
        Ok(entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await?)
    }
}
