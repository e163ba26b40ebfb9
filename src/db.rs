use anyhow::Result;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use crate::{config::DatabaseConfig, migration::Migrator};

/// Create a pooled SeaORM connection.
pub async fn create_orm_conn(config: &DatabaseConfig) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.url.clone());
    options.max_connections(config.max_connections);
    let conn = Database::connect(options).await?;
    Ok(conn)
}

/// Apply every pending migration. Safe to call on an up-to-date schema.
pub async fn run_migrations(conn: &DatabaseConnection) -> Result<()> {
    Migrator::up(conn, None).await?;
    Ok(())
}
