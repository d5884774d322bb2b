use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261017_000002_planet::Planet;

static IDX_CHARACTER_HOMEWORLD_ID: &str = "idx-character-homeworld_id";
static FK_CHARACTER_HOMEWORLD_ID: &str = "fk-character-homeworld_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline since SQLite cannot add them to an existing table
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(string_len_uniq(Character::Name, 120))
                    .col(string_len_null(Character::Gender, 20))
                    .col(string_len_null(Character::BirthYear, 20))
                    .col(string_len_null(Character::Height, 20))
                    .col(string_len_null(Character::Mass, 20))
                    .col(integer_null(Character::HomeworldId))
                    .col(timestamp(Character::CreatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CHARACTER_HOMEWORLD_ID)
                            .from(Character::Table, Character::HomeworldId)
                            .to(Planet::Table, Planet::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHARACTER_HOMEWORLD_ID)
                    .table(Character::Table)
                    .col(Character::HomeworldId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHARACTER_HOMEWORLD_ID)
                    .table(Character::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    Name,
    Gender,
    BirthYear,
    Height,
    Mass,
    HomeworldId,
    CreatedAt,
}
