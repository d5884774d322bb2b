use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, SqlErr};

use crate::{
    data::{
        character::CharacterRepository, favorite::FavoriteRepository, planet::PlanetRepository,
        user::UserRepository,
    },
    error::{favorite::FavoriteError, Error},
    model::favorite::{FavoriteDto, FavoriteTarget, FavoriteTargetDto},
};

/// Service for adding & removing a user's favorite planets and characters.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of FavoriteService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a planet or character to a user's favorites.
    ///
    /// # Returns
    /// - `Ok(FavoriteDto)` - The created favorite with its target's name
    /// - `Err(FavoriteError::UserNotFound)` - No user exists with the provided ID
    /// - `Err(FavoriteError::TargetNotFound)` - The planet or character does not exist
    /// - `Err(FavoriteError::AlreadyFavorited)` - The user already favorited the target
    /// - `Err(Error::DbErr)` - Any other database error
    pub async fn add_favorite(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<FavoriteDto, Error> {
        let favorite_repo = FavoriteRepository::new(self.db);

        let favorite = match favorite_repo.create(user_id, target).await {
            Ok(favorite) => favorite,
            Err(err) => return Err(self.translate_create_error(err, user_id, target).await),
        };

        tracing::info!("Added favorite {}", favorite);

        to_favorite_dtos(self.db, vec![favorite])
            .await?
            .pop()
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Failed to resolve newly created favorite of {} for user ID {}",
                    target, user_id
                ))
            })
    }

    /// Removes a planet or character from a user's favorites.
    ///
    /// # Returns
    /// - `Ok(true)` - The favorite was removed
    /// - `Ok(false)` - The user had not favorited the target
    pub async fn remove_favorite(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<bool, Error> {
        let result = FavoriteRepository::new(self.db)
            .delete_by_target(user_id, target)
            .await?;

        let removed = result.rows_affected > 0;
        if removed {
            tracing::info!("Removed favorite of {} for user ID {}", target, user_id);
        }

        Ok(removed)
    }

    /// Maps constraint violations raised while creating a favorite to [`FavoriteError`]s.
    ///
    /// SQLite doesn't report which foreign key failed, so the user is looked up to tell a
    /// missing user apart from a missing target.
    async fn translate_create_error(
        &self,
        err: DbErr,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Error {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                FavoriteError::AlreadyFavorited { user_id, target }.into()
            }
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                match UserRepository::new(self.db).get_by_id(user_id).await {
                    Ok(None) => FavoriteError::UserNotFound(user_id).into(),
                    Ok(Some(_)) => FavoriteError::TargetNotFound(target).into(),
                    Err(lookup_err) => lookup_err.into(),
                }
            }
            _ => err.into(),
        }
    }
}

/// Resolves the names of favorite targets, preserving the order of `favorites`.
///
/// Targets are fetched with one query per target table rather than one per favorite.
pub(crate) async fn to_favorite_dtos<C: ConnectionTrait>(
    db: &C,
    favorites: Vec<entity::favorite::Model>,
) -> Result<Vec<FavoriteDto>, Error> {
    let targets = favorites
        .iter()
        .map(FavoriteTarget::from_model)
        .collect::<Result<Vec<_>, _>>()?;

    let planet_ids: Vec<i32> = targets.iter().filter_map(|t| t.planet_id()).collect();
    let character_ids: Vec<i32> = targets.iter().filter_map(|t| t.character_id()).collect();

    let planet_names: HashMap<i32, String> = PlanetRepository::new(db)
        .get_many_by_ids(&planet_ids)
        .await?
        .into_iter()
        .map(|planet| (planet.id, planet.name))
        .collect();
    let character_names: HashMap<i32, String> = CharacterRepository::new(db)
        .get_many_by_ids(&character_ids)
        .await?
        .into_iter()
        .map(|character| (character.id, character.name))
        .collect();

    favorites
        .into_iter()
        .zip(targets)
        .map(|(favorite, target)| -> Result<FavoriteDto, Error> {
            let name = match target {
                FavoriteTarget::Planet(id) => planet_names.get(&id),
                FavoriteTarget::Character(id) => character_names.get(&id),
            }
            .cloned()
            // Would only occur if the foreign key constraints on favorite are not enforced
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Failed to find {} referenced by favorite ID {}",
                    target, favorite.id
                ))
            })?;

            let target = match target {
                FavoriteTarget::Planet(id) => FavoriteTargetDto::Planet { id, name },
                FavoriteTarget::Character(id) => FavoriteTargetDto::Character { id, name },
            };

            Ok(FavoriteDto {
                id: favorite.id,
                user_id: favorite.user_id,
                target,
                created_at: favorite.created_at,
            })
        })
        .collect()
}
