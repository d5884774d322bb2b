use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn catalog<'a>(&'a self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

/// Fixtures for the reference data users can favorite.
pub struct CatalogFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CatalogFixtures<'a> {
    pub async fn insert_mock_planet(&self, name: &str) -> Result<entity::planet::Model, TestError> {
        Ok(entity::prelude::Planet::insert(entity::planet::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            climate: ActiveValue::Set(Some("arid".to_string())),
            terrain: ActiveValue::Set(Some("desert".to_string())),
            population: ActiveValue::Set(Some("200000".to_string())),
            diameter: ActiveValue::Set(Some("10465".to_string())),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_mock_character(
        &self,
        name: &str,
        homeworld_id: Option<i32>,
    ) -> Result<entity::character::Model, TestError> {
        Ok(
            entity::prelude::Character::insert(entity::character::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                gender: ActiveValue::Set(Some("male".to_string())),
                birth_year: ActiveValue::Set(Some("19BBY".to_string())),
                height: ActiveValue::Set(Some("172".to_string())),
                mass: ActiveValue::Set(Some("77".to_string())),
                homeworld_id: ActiveValue::Set(homeworld_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
