use complaints_db::orm;
use diesel::sqlite::SqliteConnection;
use tracing::info;

use crate::config::Config;
use crate::error::AdminError;

/// Opens a fresh connection for one handler invocation.
pub fn establish_connection(config: &Config) -> Result<SqliteConnection, AdminError> {
    Ok(orm::establish_connection(&config.database_url)?)
}

/// Applies pending migrations when the configuration asks for it.
pub fn prepare_database(config: &Config) -> Result<(), AdminError> {
    if !config.run_migrations {
        info!("skipping migrations");
        return Ok(());
    }

    let mut conn = establish_connection(config)?;
    let applied = orm::run_pending_migrations(&mut conn).map_err(AdminError::Migration)?;
    for version in applied {
        info!(%version, "migration applied");
    }
    Ok(())
}
