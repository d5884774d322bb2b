use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::favorite::FavoriteTarget;

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a favorite linking a user to a planet or character
    ///
    /// # Returns
    /// - `Ok(Model)` - The created favorite
    /// - `Err(DbErr)` - A unique constraint violation if the user already favorited the
    ///   target, or a foreign key violation if the user or target does not exist
    pub async fn create(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<entity::favorite::Model, DbErr> {
        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(target.planet_id()),
            character_id: ActiveValue::Set(target.character_id()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        favorite_id: i32,
    ) -> Result<Option<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find_by_id(favorite_id)
            .one(self.db)
            .await
    }

    /// Gets all favorites of a user, oldest first
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets all favorites pointing at the provided planet
    pub async fn get_many_by_planet_id(
        &self,
        planet_id: i32,
    ) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::PlanetId.eq(planet_id))
            .all(self.db)
            .await
    }

    /// Gets all favorites pointing at the provided character
    pub async fn get_many_by_character_id(
        &self,
        character_id: i32,
    ) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::CharacterId.eq(character_id))
            .all(self.db)
            .await
    }

    /// Deletes a user's favorite of the provided target
    ///
    /// Check [`DeleteResult::rows_affected`] to know whether the favorite existed.
    pub async fn delete_by_target(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<DeleteResult, DbErr> {
        let target_condition = match target {
            FavoriteTarget::Planet(planet_id) => {
                entity::favorite::Column::PlanetId.eq(planet_id)
            }
            FavoriteTarget::Character(character_id) => {
                entity::favorite::Column::CharacterId.eq(character_id)
            }
        };

        entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(target_condition)
            .exec(self.db)
            .await
    }

    /// Deletes every favorite owned by a user
    pub async fn delete_many_by_user_id(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }
}
