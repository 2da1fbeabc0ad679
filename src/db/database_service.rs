use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

/// SeaORM backed store. Postgres in production; any SeaORM backend works.
#[derive(Clone, Debug)]
pub struct DatabaseService {
    pub(crate) database_connection: DatabaseConnection,
}

impl DatabaseService {
    pub async fn new(uri: &str, max_connections: u32) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(uri);
        options
            .max_connections(max_connections)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(false);
        Self::connect(options).await
    }

    pub async fn connect(options: ConnectOptions) -> Result<Self, DbErr> {
        info!("Connecting to database...");
        let database_connection = Database::connect(options).await?;
        info!("Running migrations...");
        Migrator::up(&database_connection, None).await?;
        info!("Database ready.");
        Ok(Self { database_connection })
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.database_connection
    }
}
