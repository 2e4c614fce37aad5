/*!
 * Complaints Administrative Console
 *
 * Interactive console for a utility company's customer-complaint records.
 * The operator picks from a numbered menu to register users (persons,
 * employees or companies), delete complaints and list a user's complaints
 * with their recall counts.
 *
 * All database access goes through the ORM functions in complaints-db.
 * Cascading deletes and the deleted-complaint log are enforced by the
 * schema shipped in complaints-db's migrations.
 *
 * Configuration comes from command-line flags, the environment or a .env
 * file. Diagnostics go to stderr and are filtered with RUST_LOG or
 * --log-level.
 */

mod admin_cli;
mod config;
mod error;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use admin_cli::menu::run_menu;
use admin_cli::prompt::Console;
use admin_cli::utils::prepare_database;
use config::Config;
use error::AdminError;

#[derive(Parser)]
#[command(name = "complaints-admin")]
#[command(about = "Interactive console for customer complaint records")]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "complaints.sqlite",
        help = "SQLite database path or URL"
    )]
    pub database_url: String,
    #[arg(long, help = "Do not apply pending migrations at startup")]
    pub skip_migrations: bool,
    #[arg(
        long,
        default_value = "warn",
        help = "Log filter used when RUST_LOG is not set (e.g. info, debug)"
    )]
    pub log_level: String,
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(config: &Config) -> Result<(), AdminError> {
    prepare_database(config)?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    run_menu(&mut console, config)?;

    Ok(())
}

fn failure_message(error: &AdminError) -> String {
    format!("Error: {}", error)
}

fn main() -> ExitCode {
    dotenv().ok();
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match run(&Config::from(&cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = ?e, "startup failed");
            eprintln!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_failure_prints_display_form() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("db.sqlite");
        let config = Config::new(path.to_string_lossy().to_string());

        let err = run(&config).expect_err("unreachable directory must fail");
        let message = failure_message(&err);
        assert!(message.starts_with("Error: "));
        assert!(!message.contains("BadConnection"));
        assert_eq!(message, format!("Error: {}", err));
    }
}
