use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::{error::data::DataError, model::species::SpeciesAttributes};

pub struct SpeciesRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SpeciesRepository<'a, C> {
    /// Creates a new instance of [`SpeciesRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new species
    ///
    /// `homeworld_id` may be absent; when present it must reference an
    /// existing planet or the insert fails with
    /// [`DataError::ConstraintViolation`].
    pub async fn create(
        &self,
        attrs: SpeciesAttributes,
    ) -> Result<entity::species::Model, DataError> {
        let now = Utc::now().naive_utc();
        let species = entity::species::ActiveModel {
            uid: ActiveValue::Set(attrs.uid),
            name: ActiveValue::Set(attrs.name),
            classification: ActiveValue::Set(attrs.classification),
            designation: ActiveValue::Set(attrs.designation),
            average_height: ActiveValue::Set(attrs.average_height),
            skin_colors: ActiveValue::Set(attrs.skin_colors),
            hair_colors: ActiveValue::Set(attrs.hair_colors),
            eye_colors: ActiveValue::Set(attrs.eye_colors),
            average_lifespan: ActiveValue::Set(attrs.average_lifespan),
            language: ActiveValue::Set(attrs.language),
            homeworld_id: ActiveValue::Set(attrs.homeworld_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(species.insert(self.db).await?)
    }

    pub async fn get(&self, species_id: i32) -> Result<Option<entity::species::Model>, DataError> {
        Ok(entity::prelude::Species::find_by_id(species_id)
            .one(self.db)
            .await?)
    }

    pub async fn get_by_uid(&self, uid: &str) -> Result<Option<entity::species::Model>, DataError> {
        Ok(entity::prelude::Species::find()
            .filter(entity::species::Column::Uid.eq(uid))
            .one(self.db)
            .await?)
    }

    pub async fn get_all(&self) -> Result<Vec<entity::species::Model>, DataError> {
        Ok(entity::prelude::Species::find().all(self.db).await?)
    }

    /// Replaces the species' attributes and refreshes `updated_at`
    ///
    /// Returns `Ok(None)` when no species with the given ID exists.
    pub async fn update(
        &self,
        species_id: i32,
        attrs: SpeciesAttributes,
    ) -> Result<Option<entity::species::Model>, DataError> {
        let species = match entity::prelude::Species::find_by_id(species_id)
            .one(self.db)
            .await?
        {
            Some(species) => species,
            None => return Ok(None),
        };

        let mut species_am = species.into_active_model();
        species_am.uid = ActiveValue::Set(attrs.uid);
        species_am.name = ActiveValue::Set(attrs.name);
        species_am.classification = ActiveValue::Set(attrs.classification);
        species_am.designation = ActiveValue::Set(attrs.designation);
        species_am.average_height = ActiveValue::Set(attrs.average_height);
        species_am.skin_colors = ActiveValue::Set(attrs.skin_colors);
        species_am.hair_colors = ActiveValue::Set(attrs.hair_colors);
        species_am.eye_colors = ActiveValue::Set(attrs.eye_colors);
        species_am.average_lifespan = ActiveValue::Set(attrs.average_lifespan);
        species_am.language = ActiveValue::Set(attrs.language);
        species_am.homeworld_id = ActiveValue::Set(attrs.homeworld_id);
        species_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let species = species_am.update(self.db).await?;

        Ok(Some(species))
    }

    /// Deletes a species
    ///
    /// Characters referencing the species do NOT cascade; the delete
    /// fails with [`DataError::ConstraintViolation`] while such
    /// dependents exist.
    pub async fn delete(&self, species_id: i32) -> Result<DeleteResult, DataError> {
        Ok(entity::prelude::Species::delete_by_id(species_id)
            .exec(self.db)
            .await?)
    }
}
