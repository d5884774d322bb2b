//! Declarative test builder.
//!
//! The builder queues table creation and fixture rows, all of which are executed during the
//! final `build()` call.

use migration::{Migrator, MigratorTrait};
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for declarative test initialization.
///
/// Methods can be chained together and finalized with `build()` to create a complete
/// test setup.
pub struct TestBuilder {
    // Schema
    run_migrations: bool,
    tables: Vec<TableCreateStatement>,

    // Database fixtures to insert
    users: Vec<String>,                        // emails
    planets: Vec<String>,                      // names
    characters: Vec<(String, Option<String>)>, // (name, homeworld planet name)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            run_migrations: false,
            tables: Vec::new(),
            users: Vec::new(),
            planets: Vec::new(),
            characters: Vec::new(),
        }
    }

    /// Create the full schema by running every migration.
    ///
    /// This is the only way to get the named composite unique indexes and the favorite
    /// target check constraint, which are not part of the entity definitions.
    pub fn with_tables(mut self) -> Self {
        self.run_migrations = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement from the entity definition. Useful for tests that
    /// need an incomplete schema to provoke database errors.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use holonet_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), holonet_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(entity::prelude::User)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock user with the provided email during `build()`.
    pub fn with_mock_user(mut self, email: impl Into<String>) -> Self {
        self.users.push(email.into());
        self
    }

    /// Insert a mock planet with the provided name during `build()`.
    pub fn with_mock_planet(mut self, name: impl Into<String>) -> Self {
        self.planets.push(name.into());
        self
    }

    /// Insert a mock character during `build()`.
    ///
    /// The homeworld is referenced by planet name and must have been queued with
    /// `with_mock_planet` beforehand.
    pub fn with_mock_character(
        mut self,
        name: impl Into<String>,
        homeworld: Option<&str>,
    ) -> Self {
        self.characters
            .push((name.into(), homeworld.map(str::to_string)));
        self
    }

    /// Build the test setup.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (migrations if requested, then individual entity tables)
    /// 2. Inserts users, planets, then characters
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    /// - `Err(TestError::UnknownPlanet)` - A character references a planet that was never queued
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        if self.run_migrations {
            Migrator::up(&setup.db, None).await?;
        }

        setup.with_tables(self.tables).await?;

        // 2. Insert database fixtures
        for email in self.users {
            setup.user().insert_mock_user(&email).await?;
        }

        let mut planet_ids = Vec::new();
        for name in self.planets {
            let planet = setup.catalog().insert_mock_planet(&name).await?;
            planet_ids.push((name, planet.id));
        }

        for (name, homeworld) in self.characters {
            let homeworld_id = match homeworld {
                None => None,
                Some(planet_name) => Some(
                    planet_ids
                        .iter()
                        .find(|(planet, _)| *planet == planet_name)
                        .map(|(_, id)| *id)
                        .ok_or(TestError::UnknownPlanet(planet_name))?,
                ),
            };

            setup
                .catalog()
                .insert_mock_character(&name, homeworld_id)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
