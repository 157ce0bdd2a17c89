//! MySQL helpers shared by the server binary and the database scripts.

use sqlx::MySqlPool;
use tracing::debug;

use crate::config::DatabaseConfig;
use crate::error::Error;

/// Opens a connection pool against the configured database.
pub async fn connect(config: &DatabaseConfig) -> Result<MySqlPool, Error> {
    let pool = MySqlPool::connect(&config.url).await?;
    debug!("database pool ready");
    Ok(pool)
}

/// Executes a multi-statement SQL script in one round trip.
///
/// The text is sent as-is, so the script may contain any number of
/// `;`-separated statements. They run in order; the first failure aborts the
/// remainder and already-executed statements are not rolled back.
pub async fn exec_batch(pool: &MySqlPool, sql: &str) -> Result<(), Error> {
    sqlx::raw_sql(sql).execute(pool).await?;
    Ok(())
}
