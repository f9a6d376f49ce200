use crate::error::DbError;
use configuration::DatabaseSettings;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::time::Duration;

/// Establishes a connection pool to the SQLite file named in the settings.
///
/// The file is created if it does not exist yet. The pool is shared by the
/// whole process; each request borrows one connection from it.
pub async fn connect(settings: &DatabaseSettings) -> Result<SqlitePool, DbError> {
    let filename = settings.filename.as_ref().ok_or_else(|| {
        DbError::ConnectionConfigError("FILENAME must be set.".to_string())
    })?;

    let options = SqliteConnectOptions::new()
        .filename(filename)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .connect_with(options)
        .await?;

    tracing::info!(path = %filename.display(), "Connected to SQLite database.");
    Ok(pool)
}

/// Applies the embedded migrations, creating the `personas` table if it is absent.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), DbError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
