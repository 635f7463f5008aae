use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DeleteResult, EntityTrait,
    QueryFilter,
};

use crate::error::data::DataError;

/// Repository for the user-to-character favorite join table.
///
/// Join rows have no independent lifecycle: they are created to express
/// the link and disappear with either endpoint.
pub struct FavoriteCharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteCharacterRepository<'a, C> {
    /// Creates a new instance of [`FavoriteCharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Links a user to a favorited character
    ///
    /// Both endpoints must exist or the insert fails with
    /// [`DataError::ConstraintViolation`].
    pub async fn create(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<entity::favorite_character::Model, DataError> {
        let favorite = entity::favorite_character::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(character_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(favorite.insert(self.db).await?)
    }

    pub async fn get(
        &self,
        favorite_id: i32,
    ) -> Result<Option<entity::favorite_character::Model>, DataError> {
        Ok(entity::prelude::FavoriteCharacter::find_by_id(favorite_id)
            .one(self.db)
            .await?)
    }

    /// Lists a user's favorited characters
    pub async fn list_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::favorite_character::Model>, DataError> {
        Ok(entity::prelude::FavoriteCharacter::find()
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .all(self.db)
            .await?)
    }

    /// Removes a favorite link
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DataError> {
        Ok(entity::prelude::FavoriteCharacter::delete_by_id(favorite_id)
            .exec(self.db)
            .await?)
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use holocron_test_utils::prelude::*;

        use crate::data::FavoriteCharacterRepository;

        /// Expect success when both endpoints exist
        #[tokio::test]
        async fn creates_favorite() -> Result<(), TestError> {
            let test = test_setup_with_catalog_tables!()?;
            let user = test
                .user()
                .insert_user("lskywalker", "luke@rebellion.org")
                .await?;
            let character = test
                .catalog()
                .insert_character("Han Solo", None, None)
                .await?;

            let favorite_repo = FavoriteCharacterRepository::new(&test.db);
            let result = favorite_repo.create(user.id, character.id).await;

            assert!(result.is_ok(), "Error: {:?}", result.err());

            Ok(())
        }

        /// Expect ConstraintViolation when the user does not exist
        #[tokio::test]
        async fn fails_for_nonexistent_user() -> Result<(), TestError> {
            let test = test_setup_with_catalog_tables!()?;
            let character = test
                .catalog()
                .insert_character("Han Solo", None, None)
                .await?;

            let favorite_repo = FavoriteCharacterRepository::new(&test.db);
            let result = favorite_repo.create(42, character.id).await;

            assert!(result.is_err_and(|e| e.is_constraint_violation()));

            Ok(())
        }

        /// Expect ConstraintViolation when the character does not exist
        #[tokio::test]
        async fn fails_for_nonexistent_character() -> Result<(), TestError> {
            let test = test_setup_with_catalog_tables!()?;
            let user = test
                .user()
                .insert_user("lskywalker", "luke@rebellion.org")
                .await?;

            let favorite_repo = FavoriteCharacterRepository::new(&test.db);
            let result = favorite_repo.create(user.id, 42).await;

            assert!(result.is_err_and(|e| e.is_constraint_violation()));

            Ok(())
        }
    }

    mod list {
        use holocron_test_utils::prelude::*;

        use crate::data::FavoriteCharacterRepository;

        /// Expect only the requested user's favorites to be returned
        #[tokio::test]
        async fn lists_favorites_for_user() -> Result<(), TestError> {
            let test = test_setup_with_catalog_tables!()?;
            let luke = test
                .user()
                .insert_user("lskywalker", "luke@rebellion.org")
                .await?;
            let leia = test
                .user()
                .insert_user("lorgana", "leia@rebellion.org")
                .await?;
            let han = test.catalog().insert_character("Han Solo", None, None).await?;
            let chewie = test
                .catalog()
                .insert_character("Chewbacca", None, None)
                .await?;
            test.user().insert_favorite_character(luke.id, han.id).await?;
            test.user()
                .insert_favorite_character(luke.id, chewie.id)
                .await?;
            test.user().insert_favorite_character(leia.id, han.id).await?;

            let favorite_repo = FavoriteCharacterRepository::new(&test.db);
            let favorites = favorite_repo.list_for_user(luke.id).await.unwrap();

            assert_eq!(favorites.len(), 2);
            assert!(favorites.iter().all(|f| f.user_id == luke.id));

            Ok(())
        }
    }

    mod delete {
        use holocron_test_utils::prelude::*;

        use crate::data::FavoriteCharacterRepository;

        /// Expect success when removing an existing favorite link
        #[tokio::test]
        async fn deletes_existing_favorite() -> Result<(), TestError> {
            let test = test_setup_with_catalog_tables!()?;
            let user = test
                .user()
                .insert_user("lskywalker", "luke@rebellion.org")
                .await?;
            let character = test
                .catalog()
                .insert_character("Han Solo", None, None)
                .await?;
            let favorite = test
                .user()
                .insert_favorite_character(user.id, character.id)
                .await?;

            let favorite_repo = FavoriteCharacterRepository::new(&test.db);
            let result = favorite_repo.delete(favorite.id).await;

            assert!(result.is_ok());
            assert_eq!(result.unwrap().rows_affected, 1);

            Ok(())
        }
    }
}
