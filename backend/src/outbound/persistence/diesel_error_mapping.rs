//! Shared Diesel error classification for the social repositories.
//!
//! Repositories first classify a Diesel failure, then map the class onto
//! their own port error. Constraint violations keep the constraint name so
//! the domain can tell a dangling reference from a blocked delete.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Coarse class of a Diesel failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DieselFailure {
    /// The connection dropped or could not be used.
    Connection(&'static str),
    /// A foreign key constraint rejected the statement.
    ForeignKey { constraint: String },
    /// A unique constraint rejected the statement.
    Unique { constraint: String },
    /// Any other query failure.
    Query(&'static str),
}

/// Extract a readable message from a pool error.
pub(crate) fn pool_error_message(error: PoolError) -> String {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    }
}

/// Classify a Diesel error, emitting debug context.
pub(crate) fn classify_diesel_error(error: DieselError) -> DieselFailure {
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
        DieselError::NotFound => DieselFailure::Query("record not found"),
        DieselError::QueryBuilderError(_) => DieselFailure::Query("database query error"),
        DieselError::DatabaseError(kind, info) => {
            let constraint = || info.constraint_name().unwrap_or("unnamed").to_owned();
            match kind {
                DatabaseErrorKind::ForeignKeyViolation => DieselFailure::ForeignKey {
                    constraint: constraint(),
                },
                DatabaseErrorKind::UniqueViolation => DieselFailure::Unique {
                    constraint: constraint(),
                },
                DatabaseErrorKind::ClosedConnection => {
                    DieselFailure::Connection("database connection error")
                }
                _ => DieselFailure::Query("database error"),
            }
        }
        _ => DieselFailure::Query("database error"),
    }
}
