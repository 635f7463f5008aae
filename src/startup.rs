use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::{config::Config, error::Error};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(config.sqlx_logging);

    let db = Database::connect(opt).await?;
    info!("connected to database");

    Migrator::up(&db, None).await?;
    info!("database migrations applied");

    Ok(db)
}
