use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::catalog::NewCharacter;

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new character
    ///
    /// Fails with a unique constraint violation if the name is taken, or a foreign key
    /// violation if the homeworld planet does not exist.
    pub async fn create(
        &self,
        new_character: NewCharacter,
    ) -> Result<entity::character::Model, DbErr> {
        let character = entity::character::ActiveModel {
            name: ActiveValue::Set(new_character.name),
            gender: ActiveValue::Set(new_character.gender),
            birth_year: ActiveValue::Set(new_character.birth_year),
            height: ActiveValue::Set(new_character.height),
            mass: ActiveValue::Set(new_character.mass),
            homeworld_id: ActiveValue::Set(new_character.homeworld_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        character.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        character_id: i32,
    ) -> Result<Option<entity::character::Model>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await
    }

    /// Gets a character along with their homeworld, if they have one
    pub async fn get_with_homeworld(
        &self,
        character_id: i32,
    ) -> Result<Option<(entity::character::Model, Option<entity::planet::Model>)>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .find_also_related(entity::planet::Entity)
            .one(self.db)
            .await
    }

    /// Gets all characters whose homeworld is the provided planet
    pub async fn get_many_by_homeworld_id(
        &self,
        planet_id: i32,
    ) -> Result<Vec<entity::character::Model>, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::HomeworldId.eq(planet_id))
            .order_by_asc(entity::character::Column::Name)
            .all(self.db)
            .await
    }

    /// Gets all characters matching the provided IDs, IDs without a character are skipped
    pub async fn get_many_by_ids(
        &self,
        character_ids: &[i32],
    ) -> Result<Vec<entity::character::Model>, DbErr> {
        if character_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Character::find()
            .filter(entity::character::Column::Id.is_in(character_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Gets all characters ordered by name
    pub async fn get_all(&self) -> Result<Vec<entity::character::Model>, DbErr> {
        entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Name)
            .all(self.db)
            .await
    }

    /// Deletes a character, failing with a foreign key violation while it is still favorited
    pub async fn delete(&self, character_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Character::delete_by_id(character_id)
            .exec(self.db)
            .await
    }
}
