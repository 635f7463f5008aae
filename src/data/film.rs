use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::{error::data::DataError, model::film::FilmAttributes};

pub struct FilmRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FilmRepository<'a, C> {
    /// Creates a new instance of [`FilmRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new film
    pub async fn create(&self, attrs: FilmAttributes) -> Result<entity::film::Model, DataError> {
        let now = Utc::now().naive_utc();
        let film = entity::film::ActiveModel {
            uid: ActiveValue::Set(attrs.uid),
            title: ActiveValue::Set(attrs.title),
            episode_id: ActiveValue::Set(attrs.episode_id),
            opening_crawl: ActiveValue::Set(attrs.opening_crawl),
            director: ActiveValue::Set(attrs.director),
            producer: ActiveValue::Set(attrs.producer),
            release_date: ActiveValue::Set(attrs.release_date),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(film.insert(self.db).await?)
    }

    pub async fn get(&self, film_id: i32) -> Result<Option<entity::film::Model>, DataError> {
        Ok(entity::prelude::Film::find_by_id(film_id)
            .one(self.db)
            .await?)
    }

    pub async fn get_by_uid(&self, uid: &str) -> Result<Option<entity::film::Model>, DataError> {
        Ok(entity::prelude::Film::find()
            .filter(entity::film::Column::Uid.eq(uid))
            .one(self.db)
            .await?)
    }

    pub async fn get_all(&self) -> Result<Vec<entity::film::Model>, DataError> {
        Ok(entity::prelude::Film::find().all(self.db).await?)
    }

    /// Replaces the film's attributes and refreshes `updated_at`
    ///
    /// Returns `Ok(None)` when no film with the given ID exists.
    pub async fn update(
        &self,
        film_id: i32,
        attrs: FilmAttributes,
    ) -> Result<Option<entity::film::Model>, DataError> {
        let film = match entity::prelude::Film::find_by_id(film_id)
            .one(self.db)
            .await?
        {
            Some(film) => film,
            None => return Ok(None),
        };

        let mut film_am = film.into_active_model();
        film_am.uid = ActiveValue::Set(attrs.uid);
        film_am.title = ActiveValue::Set(attrs.title);
        film_am.episode_id = ActiveValue::Set(attrs.episode_id);
        film_am.opening_crawl = ActiveValue::Set(attrs.opening_crawl);
        film_am.director = ActiveValue::Set(attrs.director);
        film_am.producer = ActiveValue::Set(attrs.producer);
        film_am.release_date = ActiveValue::Set(attrs.release_date);
        film_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let film = film_am.update(self.db).await?;

        Ok(Some(film))
    }

    /// Deletes a film
    ///
    /// The film's appearance links are removed by the cascade rules.
    /// Returns OK regardless of the film existing; check
    /// [`DeleteResult::rows_affected`].
    pub async fn delete(&self, film_id: i32) -> Result<DeleteResult, DataError> {
        Ok(entity::prelude::Film::delete_by_id(film_id)
            .exec(self.db)
            .await?)
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use chrono::NaiveDate;
        use holocron_test_utils::prelude::*;

        use crate::{data::FilmRepository, model::film::FilmAttributes};

        /// Expect success when creating a new film
        #[tokio::test]
        async fn creates_film() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Film)?;

            let film_repo = FilmRepository::new(&test.db);
            let mut attrs = FilmAttributes::titled("A New Hope");
            attrs.episode_id = Some(4);
            attrs.release_date = NaiveDate::from_ymd_opt(1977, 5, 25);
            let result = film_repo.create(attrs).await;

            assert!(result.is_ok(), "Error: {:?}", result.err());
            let film = result.unwrap();
            assert_eq!(film.episode_id, Some(4));

            Ok(())
        }

        /// Expect ConstraintViolation when reusing an existing uid
        #[tokio::test]
        async fn fails_for_duplicate_uid() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Film)?;

            let film_repo = FilmRepository::new(&test.db);
            let mut attrs = FilmAttributes::titled("A New Hope");
            attrs.uid = Some("1".to_string());
            film_repo.create(attrs.clone()).await.unwrap();
            attrs.title = "The Empire Strikes Back".to_string();
            let result = film_repo.create(attrs).await;

            assert!(result.is_err_and(|e| e.is_constraint_violation()));

            Ok(())
        }
    }

    mod get {
        use holocron_test_utils::prelude::*;

        use crate::data::FilmRepository;

        /// Expect Ok(Some(_)) when existing film is found
        #[tokio::test]
        async fn finds_existing_film() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Film)?;
            let film = test.catalog().insert_film("A New Hope").await?;

            let film_repo = FilmRepository::new(&test.db);
            let result = film_repo.get(film.id).await;

            assert!(matches!(result, Ok(Some(_))));

            Ok(())
        }

        /// Expect Ok(None) when film is not found
        #[tokio::test]
        async fn returns_none_for_nonexistent_film() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Film)?;

            let film_repo = FilmRepository::new(&test.db);
            let result = film_repo.get(1).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }

    mod update {
        use holocron_test_utils::prelude::*;

        use crate::{data::FilmRepository, model::film::FilmAttributes};

        /// Expect update to replace attributes and refresh updated_at
        #[tokio::test]
        async fn updates_existing_film() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Film)?;
            let film = test.catalog().insert_film("A New Hop").await?;

            let film_repo = FilmRepository::new(&test.db);
            let result = film_repo
                .update(film.id, FilmAttributes::titled("A New Hope"))
                .await;

            assert!(matches!(result, Ok(Some(_))));
            let updated = result.unwrap().unwrap();
            assert_eq!(updated.title, "A New Hope");
            assert_ne!(updated.updated_at, film.updated_at);

            Ok(())
        }

        /// Expect Ok(None) when attempting to update film ID that does not exist
        #[tokio::test]
        async fn returns_none_for_nonexistent_film() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Film)?;

            let film_repo = FilmRepository::new(&test.db);
            let result = film_repo.update(1, FilmAttributes::titled("A New Hope")).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }

    mod delete {
        use holocron_test_utils::prelude::*;

        use crate::data::FilmRepository;

        /// Expect success when deleting film
        #[tokio::test]
        async fn deletes_existing_film() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Film)?;
            let film = test.catalog().insert_film("A New Hope").await?;

            let film_repo = FilmRepository::new(&test.db);
            let result = film_repo.delete(film.id).await;

            assert!(result.is_ok());
            assert_eq!(result.unwrap().rows_affected, 1);

            Ok(())
        }

        /// Expect no rows to be affected when deleting film that does not exist
        #[tokio::test]
        async fn returns_no_rows_for_nonexistent_film() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Film)?;

            let film_repo = FilmRepository::new(&test.db);
            let result = film_repo.delete(1).await;

            assert!(result.is_ok());
            assert_eq!(result.unwrap().rows_affected, 0);

            Ok(())
        }
    }
}
