use thiserror::Error;

/// Failures surfaced by the admin console.
///
/// Database and connection errors print as the driver's own message, which
/// is what handlers show to the operator.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error(transparent)]
    Connection(#[from] diesel::result::ConnectionError),
    #[error(transparent)]
    Database(#[from] diesel::result::Error),
    #[error("failed to run migrations: {0}")]
    Migration(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_migration_error_keeps_source() {
        let cause = std::io::Error::other("disk full");
        let err = AdminError::Migration(Box::new(cause));

        assert_eq!(err.to_string(), "failed to run migrations: disk full");
        let source = err.source().expect("migration error has a source");
        assert_eq!(source.to_string(), "disk full");
    }
}
