use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260115_000002_create_planets_table::Planets, m20260115_000003_create_species_table::Species,
};

static FK_CHARACTER_HOMEWORLD_ID: &str = "fk_characters_homeworld_id";
static FK_CHARACTER_SPECIES_ID: &str = "fk_characters_species_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Characters::Table)
                    .if_not_exists()
                    .col(pk_auto(Characters::Id))
                    .col(ColumnDef::new(Characters::Uid).string().unique_key())
                    .col(string(Characters::Name))
                    .col(string_null(Characters::Height))
                    .col(string_null(Characters::Mass))
                    .col(string_null(Characters::HairColor))
                    .col(string_null(Characters::SkinColor))
                    .col(string_null(Characters::EyeColor))
                    .col(string_null(Characters::BirthYear))
                    .col(string_null(Characters::Gender))
                    .col(integer_null(Characters::HomeworldId))
                    .col(integer_null(Characters::SpeciesId))
                    .col(timestamp(Characters::CreatedAt))
                    .col(timestamp(Characters::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Non-cascading on purpose: planets and species with dependent
        // characters cannot be deleted.
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHARACTER_HOMEWORLD_ID)
                    .from_tbl(Characters::Table)
                    .from_col(Characters::HomeworldId)
                    .to_tbl(Planets::Table)
                    .to_col(Planets::Id)
                    .on_update(ForeignKeyAction::Cascade)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHARACTER_SPECIES_ID)
                    .from_tbl(Characters::Table)
                    .from_col(Characters::SpeciesId)
                    .to_tbl(Species::Table)
                    .to_col(Species::Id)
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
                    .name(FK_CHARACTER_SPECIES_ID)
                    .table(Characters::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CHARACTER_HOMEWORLD_ID)
                    .table(Characters::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Characters::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Characters {
    Table,
    Id,
    Uid,
    Name,
    Height,
    Mass,
    HairColor,
    SkinColor,
    EyeColor,
    BirthYear,
    Gender,
    HomeworldId,
    SpeciesId,
    CreatedAt,
    UpdatedAt,
}
