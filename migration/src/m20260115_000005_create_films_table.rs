use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Films::Table)
                    .if_not_exists()
                    .col(pk_auto(Films::Id))
                    .col(ColumnDef::new(Films::Uid).string().unique_key())
                    .col(string(Films::Title))
                    .col(integer_null(Films::EpisodeId))
                    .col(text_null(Films::OpeningCrawl))
                    .col(string_null(Films::Director))
                    .col(string_null(Films::Producer))
                    .col(date_null(Films::ReleaseDate))
                    .col(timestamp(Films::CreatedAt))
                    .col(timestamp(Films::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Films::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Films {
    Table,
    Id,
    Uid,
    Title,
    EpisodeId,
    OpeningCrawl,
    Director,
    Producer,
    ReleaseDate,
    CreatedAt,
    UpdatedAt,
}
