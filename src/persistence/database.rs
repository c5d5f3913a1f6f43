use crate::config::DatabaseConfig;
use crate::error::Result;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Open a connection pool for `config.url`
///
/// An in-memory SQLite database lives inside a single connection, so the
/// pool is capped at one connection for such URLs.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection> {
    let in_memory = config.url.contains(":memory:");
    let max_connections = if in_memory { 1 } else { config.max_connections };

    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(max_connections)
        .min_connections(1)
        .sqlx_logging(false);

    tracing::info!(max_connections, in_memory, "Connecting to database...");
    let db = Database::connect(options).await?;
    tracing::info!("Database connection pool ready");

    Ok(db)
}
