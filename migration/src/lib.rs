pub use sea_orm_migration::prelude::*;

mod m20260115_000001_create_users_table;
mod m20260115_000002_create_planets_table;
mod m20260115_000003_create_species_table;
mod m20260115_000004_create_characters_table;
mod m20260115_000005_create_films_table;
mod m20260115_000006_create_favorite_characters_table;
mod m20260115_000007_create_favorite_planets_table;
mod m20260115_000008_create_film_characters_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260115_000001_create_users_table::Migration),
            Box::new(m20260115_000002_create_planets_table::Migration),
            Box::new(m20260115_000003_create_species_table::Migration),
            Box::new(m20260115_000004_create_characters_table::Migration),
            Box::new(m20260115_000005_create_films_table::Migration),
            Box::new(m20260115_000006_create_favorite_characters_table::Migration),
            Box::new(m20260115_000007_create_favorite_planets_table::Migration),
            Box::new(m20260115_000008_create_film_characters_table::Migration),
        ]
    }
}
