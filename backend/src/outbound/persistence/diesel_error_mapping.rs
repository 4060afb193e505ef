//! Diesel and pool error mapping shared by the SQLite repositories.

use tracing::debug;

use crate::domain::ports::StoreError;

use super::pool::PoolError;

/// Map pool errors to store connection failures.
pub(super) fn map_pool_error(error: PoolError) -> StoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            StoreError::connection(message)
        }
    }
}

/// Map Diesel errors to store failures.
///
/// Only a closed connection counts as a connection failure; everything else,
/// constraint violations included, is a query failure.
pub(super) fn map_diesel_error(error: diesel::result::Error) -> StoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => StoreError::query("record not found"),
        DieselError::QueryBuilderError(_) => StoreError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            StoreError::connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            StoreError::query("unique constraint violated")
        }
        _ => StoreError::query("database error"),
    }
}

/// Convert a SQL `COUNT(*)` result to an unsigned total.
pub(super) fn count_to_u64(total: i64) -> Result<u64, StoreError> {
    u64::try_from(total).map_err(|_| StoreError::query(format!("negative row count {total}")))
}
