use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The single planet or character a favorite points at.
///
/// The `favorite` table stores this as two nullable columns with a check constraint that
/// exactly one is set; this type makes any other combination unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum FavoriteTarget {
    Planet(i32),
    Character(i32),
}

impl FavoriteTarget {
    /// Reads the target of a stored favorite.
    ///
    /// # Returns
    /// - `Ok(FavoriteTarget)` - Exactly one of `planet_id` & `character_id` is set
    /// - `Err(Error::InternalError)` - Both or neither are set, which the schema's check
    ///   constraint should have prevented
    pub fn from_model(model: &entity::favorite::Model) -> Result<Self, Error> {
        match (model.planet_id, model.character_id) {
            (Some(planet_id), None) => Ok(Self::Planet(planet_id)),
            (None, Some(character_id)) => Ok(Self::Character(character_id)),
            (planet_id, character_id) => Err(Error::InternalError(format!(
                "Favorite ID {} must reference exactly one planet or character, found planet ID {:?} & character ID {:?}",
                model.id, planet_id, character_id
            ))),
        }
    }

    pub fn planet_id(&self) -> Option<i32> {
        match self {
            Self::Planet(id) => Some(*id),
            Self::Character(_) => None,
        }
    }

    pub fn character_id(&self) -> Option<i32> {
        match self {
            Self::Planet(_) => None,
            Self::Character(id) => Some(*id),
        }
    }
}

impl fmt::Display for FavoriteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Planet(id) => write!(f, "planet ID {}", id),
            Self::Character(id) => write!(f, "character ID {}", id),
        }
    }
}

/// A favorite with its target resolved to a name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    pub target: FavoriteTargetDto,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FavoriteTargetDto {
    Planet { id: i32, name: String },
    Character { id: i32, name: String },
}
