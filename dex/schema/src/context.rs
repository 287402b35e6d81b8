use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Opens the pool a [`crate::SchemaManager`] is built on.
pub async fn connect_db_with_url(
    database_url: &str,
    max_connections: u32,
) -> Result<DatabaseConnection, sea_orm::DbErr> {
    let mut opt = ConnectOptions::new(database_url.to_owned());
    opt.max_connections(max_connections)
        .sqlx_logging(false);

    match Database::connect(opt).await {
        Ok(db) => {
            tracing::info!(database_url, "Connected to database");

            Ok(db)
        },
        Err(error) => {
            tracing::error!(database_url, %error, "Failed to connect to database");

            Err(error)
        },
    }
}

/// In-memory SQLite, for tests and dry runs.
pub async fn connect_memory_db() -> Result<DatabaseConnection, sea_orm::DbErr> {
    connect_db_with_url("sqlite::memory:", 1).await
}
