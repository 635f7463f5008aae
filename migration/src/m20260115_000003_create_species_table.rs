use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000002_create_planets_table::Planets;

static FK_SPECIES_HOMEWORLD_ID: &str = "fk_species_homeworld_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Species::Table)
                    .if_not_exists()
                    .col(pk_auto(Species::Id))
                    .col(ColumnDef::new(Species::Uid).string().unique_key())
                    .col(string(Species::Name))
                    .col(string_null(Species::Classification))
                    .col(string_null(Species::Designation))
                    .col(string_null(Species::AverageHeight))
                    .col(string_null(Species::SkinColors))
                    .col(string_null(Species::HairColors))
                    .col(string_null(Species::EyeColors))
                    .col(string_null(Species::AverageLifespan))
                    .col(string_null(Species::Language))
                    .col(integer_null(Species::HomeworldId))
                    .col(timestamp(Species::CreatedAt))
                    .col(timestamp(Species::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Non-cascading on purpose: a planet with dependent species cannot
        // be deleted.
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SPECIES_HOMEWORLD_ID)
                    .from_tbl(Species::Table)
                    .from_col(Species::HomeworldId)
                    .to_tbl(Planets::Table)
                    .to_col(Planets::Id)
                    .on_update(ForeignKeyAction::Cascade)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SPECIES_HOMEWORLD_ID)
                    .table(Species::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Species::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Species {
    Table,
    Id,
    Uid,
    Name,
    Classification,
    Designation,
    AverageHeight,
    SkinColors,
    HairColors,
    EyeColors,
    AverageLifespan,
    Language,
    HomeworldId,
    CreatedAt,
    UpdatedAt,
}
