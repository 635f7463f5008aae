use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260115_000001_create_users_table::Users,
    m20260115_000004_create_characters_table::Characters,
};

static IDX_FAVORITE_CHARACTER_USER_ID: &str = "idx_favorite_characters_user_id";
static FK_FAVORITE_CHARACTER_USER_ID: &str = "fk_favorite_characters_user_id";
static FK_FAVORITE_CHARACTER_CHARACTER_ID: &str = "fk_favorite_characters_character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoriteCharacters::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoriteCharacters::Id))
                    .col(integer(FavoriteCharacters::UserId))
                    .col(integer(FavoriteCharacters::CharacterId))
                    .col(timestamp(FavoriteCharacters::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_CHARACTER_USER_ID)
                    .table(FavoriteCharacters::Table)
                    .col(FavoriteCharacters::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_CHARACTER_USER_ID)
                    .from_tbl(FavoriteCharacters::Table)
                    .from_col(FavoriteCharacters::UserId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .on_update(ForeignKeyAction::Cascade)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_CHARACTER_CHARACTER_ID)
                    .from_tbl(FavoriteCharacters::Table)
                    .from_col(FavoriteCharacters::CharacterId)
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
                    .name(FK_FAVORITE_CHARACTER_CHARACTER_ID)
                    .table(FavoriteCharacters::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_CHARACTER_USER_ID)
                    .table(FavoriteCharacters::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_CHARACTER_USER_ID)
                    .table(FavoriteCharacters::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FavoriteCharacters::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FavoriteCharacters {
    Table,
    Id,
    UserId,
    CharacterId,
    CreatedAt,
}
