use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planets::Table)
                    .if_not_exists()
                    .col(pk_auto(Planets::Id))
                    .col(ColumnDef::new(Planets::Uid).string().unique_key())
                    .col(string(Planets::Name))
                    .col(string_null(Planets::RotationPeriod))
                    .col(string_null(Planets::OrbitalPeriod))
                    .col(string_null(Planets::Diameter))
                    .col(string_null(Planets::Gravity))
                    .col(string_null(Planets::Population))
                    .col(string_null(Planets::Climate))
                    .col(string_null(Planets::Terrain))
                    .col(string_null(Planets::SurfaceWater))
                    .col(timestamp(Planets::CreatedAt))
                    .col(timestamp(Planets::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planets::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Planets {
    Table,
    Id,
    Uid,
    Name,
    RotationPeriod,
    OrbitalPeriod,
    Diameter,
    Gravity,
    Population,
    Climate,
    Terrain,
    SurfaceWater,
    CreatedAt,
    UpdatedAt,
}
