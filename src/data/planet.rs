use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::catalog::NewPlanet;

pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new planet, failing with a unique constraint violation if the name is taken
    pub async fn create(&self, new_planet: NewPlanet) -> Result<entity::planet::Model, DbErr> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(new_planet.name),
            climate: ActiveValue::Set(new_planet.climate),
            terrain: ActiveValue::Set(new_planet.terrain),
            population: ActiveValue::Set(new_planet.population),
            diameter: ActiveValue::Set(new_planet.diameter),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    pub async fn get_by_id(&self, planet_id: i32) -> Result<Option<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find()
            .filter(entity::planet::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Gets all planets matching the provided IDs, IDs without a planet are skipped
    pub async fn get_many_by_ids(
        &self,
        planet_ids: &[i32],
    ) -> Result<Vec<entity::planet::Model>, DbErr> {
        if planet_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Planet::find()
            .filter(entity::planet::Column::Id.is_in(planet_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Gets all planets ordered by name
    pub async fn get_all(&self) -> Result<Vec<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Name)
            .all(self.db)
            .await
    }

    /// Deletes a planet
    ///
    /// Planets don't cascade: deleting one that is still a character's homeworld or
    /// a user's favorite fails with a foreign key violation.
    pub async fn delete(&self, planet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Planet::delete_by_id(planet_id)
            .exec(self.db)
            .await
    }
}
