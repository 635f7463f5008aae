use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260115_000004_create_characters_table::Characters,
    m20260115_000005_create_films_table::Films,
};

static IDX_FILM_CHARACTER_FILM_ID: &str = "idx_film_characters_film_id";
static FK_FILM_CHARACTER_FILM_ID: &str = "fk_film_characters_film_id";
static FK_FILM_CHARACTER_CHARACTER_ID: &str = "fk_film_characters_character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FilmCharacters::Table)
                    .if_not_exists()
                    .col(pk_auto(FilmCharacters::Id))
                    .col(integer(FilmCharacters::FilmId))
                    .col(integer(FilmCharacters::CharacterId))
                    .col(timestamp(FilmCharacters::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FILM_CHARACTER_FILM_ID)
                    .table(FilmCharacters::Table)
                    .col(FilmCharacters::FilmId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FILM_CHARACTER_FILM_ID)
                    .from_tbl(FilmCharacters::Table)
                    .from_col(FilmCharacters::FilmId)
                    .to_tbl(Films::Table)
                    .to_col(Films::Id)
                    .on_update(ForeignKeyAction::Cascade)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FILM_CHARACTER_CHARACTER_ID)
                    .from_tbl(FilmCharacters::Table)
                    .from_col(FilmCharacters::CharacterId)
                    .to_tbl(Characters::Table)
                    .to_col(Characters::Id)
                    .on_update(ForeignKeyAction::Cascade)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FILM_CHARACTER_CHARACTER_ID)
                    .table(FilmCharacters::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FILM_CHARACTER_FILM_ID)
                    .table(FilmCharacters::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FILM_CHARACTER_FILM_ID)
                    .table(FilmCharacters::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FilmCharacters::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FilmCharacters {
    Table,
    Id,
    FilmId,
    CharacterId,
    CreatedAt,
}
