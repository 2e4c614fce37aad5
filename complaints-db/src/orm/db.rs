use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use std::error::Error;
use tracing::{debug, info};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Enables foreign key support for SQLite connections.
///
/// This executes the `PRAGMA foreign_keys = ON` command on the provided
/// connection. Foreign keys are disabled by default in SQLite for backwards
/// compatibility, and the cascade from complaints to recalls and material
/// links only fires when they are on.
///
/// # Arguments
/// * `conn` - A mutable reference to a SQLite database connection
pub fn set_foreign_keys(conn: &mut SqliteConnection) -> QueryResult<()> {
    conn.batch_execute("PRAGMA foreign_keys = ON")
}

/// Opens a connection to `database_url` with foreign keys enabled.
///
/// The connection is closed when the returned value is dropped.
pub fn establish_connection(database_url: &str) -> ConnectionResult<SqliteConnection> {
    let mut conn = SqliteConnection::establish(database_url)?;
    set_foreign_keys(&mut conn).map_err(ConnectionError::CouldntSetupConfiguration)?;
    debug!(database_url, "database connection established");
    Ok(conn)
}

/// Runs all pending database migrations on the provided connection.
///
/// # Returns
/// The versions of the migrations that were applied, oldest first.
pub fn run_pending_migrations(
    conn: &mut SqliteConnection,
) -> Result<Vec<String>, Box<dyn Error + Send + Sync>> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)?
        .iter()
        .map(|version| version.to_string())
        .collect::<Vec<_>>();
    if !applied.is_empty() {
        info!(count = applied.len(), "applied pending migrations");
    }
    Ok(applied)
}
