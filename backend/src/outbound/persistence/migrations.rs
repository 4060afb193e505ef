//! Embedded schema migrations applied at startup.

use diesel::Connection;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use crate::domain::ports::StoreError;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Create the database file if needed and apply pending migrations.
///
/// Runs on a plain blocking connection; call it before the pool is built.
/// Returns the number of migrations applied.
///
/// # Errors
///
/// [`StoreError::Connection`] when the file cannot be opened and
/// [`StoreError::Query`] when a migration fails.
pub fn run_migrations(database_url: &str) -> Result<usize, StoreError> {
    let mut conn = SqliteConnection::establish(database_url)
        .map_err(|err| StoreError::connection(err.to_string()))?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| StoreError::query(format!("migration: {err}")))?
        .len();
    info!(applied, "database migrations complete");
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    #[rstest]
    fn migrations_apply_once() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("database.db");
        let url = path.to_str().expect("utf8 path");

        let first = run_migrations(url).expect("first run");
        let second = run_migrations(url).expect("second run");

        assert!(first >= 1);
        assert_eq!(second, 0);
    }

    #[rstest]
    fn unopenable_path_is_a_connection_failure() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("missing").join("database.db");

        let err = run_migrations(path.to_str().expect("utf8 path")).expect_err("must fail");

        assert!(matches!(err, StoreError::Connection { .. }));
    }
}
