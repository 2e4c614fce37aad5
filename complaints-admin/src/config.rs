use crate::Cli;

/// Where the database lives and what to do with it at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub run_migrations: bool,
}

impl Config {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            run_migrations: true,
        }
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            run_migrations: !cli.skip_migrations,
            ..Self::new(cli.database_url.clone())
        }
    }
}
