//! Repository inputs and DTOs for the planets & characters users can favorite.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Fields required to create a planet. Descriptive attributes are free-form text.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewPlanet {
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<String>,
    pub diameter: Option<String>,
}

/// Fields required to create a character. Descriptive attributes are free-form text.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewCharacter {
    pub name: String,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
    pub height: Option<String>,
    pub mass: Option<String>,
    /// ID of the character's homeworld planet, if known
    pub homeworld_id: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<String>,
    pub diameter: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<entity::planet::Model> for PlanetDto {
    fn from(model: entity::planet::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            climate: model.climate,
            terrain: model.terrain,
            population: model.population,
            diameter: model.diameter,
            created_at: model.created_at,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub homeworld_id: Option<i32>,
    pub created_at: NaiveDateTime,
}

impl From<entity::character::Model> for CharacterDto {
    fn from(model: entity::character::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            gender: model.gender,
            birth_year: model.birth_year,
            height: model.height,
            mass: model.mass,
            homeworld_id: model.homeworld_id,
            created_at: model.created_at,
        }
    }
}
