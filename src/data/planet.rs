use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::{error::data::DataError, model::planet::PlanetAttributes};

pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new planet
    ///
    /// A duplicate `uid` fails with [`DataError::ConstraintViolation`];
    /// planets without a uid are unrestricted.
    pub async fn create(&self, attrs: PlanetAttributes) -> Result<entity::planet::Model, DataError> {
        let now = Utc::now().naive_utc();
        let planet = entity::planet::ActiveModel {
            uid: ActiveValue::Set(attrs.uid),
            name: ActiveValue::Set(attrs.name),
            rotation_period: ActiveValue::Set(attrs.rotation_period),
            orbital_period: ActiveValue::Set(attrs.orbital_period),
            diameter: ActiveValue::Set(attrs.diameter),
            gravity: ActiveValue::Set(attrs.gravity),
            population: ActiveValue::Set(attrs.population),
            climate: ActiveValue::Set(attrs.climate),
            terrain: ActiveValue::Set(attrs.terrain),
            surface_water: ActiveValue::Set(attrs.surface_water),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(planet.insert(self.db).await?)
    }

    pub async fn get(&self, planet_id: i32) -> Result<Option<entity::planet::Model>, DataError> {
        Ok(entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await?)
    }

    pub async fn get_by_uid(&self, uid: &str) -> Result<Option<entity::planet::Model>, DataError> {
        Ok(entity::prelude::Planet::find()
            .filter(entity::planet::Column::Uid.eq(uid))
            .one(self.db)
            .await?)
    }

    pub async fn get_all(&self) -> Result<Vec<entity::planet::Model>, DataError> {
        Ok(entity::prelude::Planet::find().all(self.db).await?)
    }

    /// Replaces the planet's attributes and refreshes `updated_at`
    ///
    /// Returns `Ok(None)` when no planet with the given ID exists.
    pub async fn update(
        &self,
        planet_id: i32,
        attrs: PlanetAttributes,
    ) -> Result<Option<entity::planet::Model>, DataError> {
        let planet = match entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await?
        {
            Some(planet) => planet,
            None => return Ok(None),
        };

        let mut planet_am = planet.into_active_model();
        planet_am.uid = ActiveValue::Set(attrs.uid);
        planet_am.name = ActiveValue::Set(attrs.name);
        planet_am.rotation_period = ActiveValue::Set(attrs.rotation_period);
        planet_am.orbital_period = ActiveValue::Set(attrs.orbital_period);
        planet_am.diameter = ActiveValue::Set(attrs.diameter);
        planet_am.gravity = ActiveValue::Set(attrs.gravity);
        planet_am.population = ActiveValue::Set(attrs.population);
        planet_am.climate = ActiveValue::Set(attrs.climate);
        planet_am.terrain = ActiveValue::Set(attrs.terrain);
        planet_am.surface_water = ActiveValue::Set(attrs.surface_water);
        planet_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let planet = planet_am.update(self.db).await?;

        Ok(Some(planet))
    }

    /// Deletes a planet
    ///
    /// Favorite links pointing at the planet are removed by the cascade
    /// rules; characters and species referencing it as homeworld do NOT
    /// cascade, so the delete fails with
    /// [`DataError::ConstraintViolation`] while such dependents exist.
    pub async fn delete(&self, planet_id: i32) -> Result<DeleteResult, DataError> {
        Ok(entity::prelude::Planet::delete_by_id(planet_id)
            .exec(self.db)
            .await?)
    }
}
