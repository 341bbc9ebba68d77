//! Error handling utilities for repositories

use reservation_core::error::DomainError;
use sqlx::Error as SqlxError;

/// SQLSTATE classes and codes worth another attempt
fn is_transient_sqlstate(code: &str) -> bool {
    // 08: connection exception, 53: insufficient resources
    code.starts_with("08")
        || code.starts_with("53")
        || matches!(
            code,
            "40001" // serialization_failure
                | "40P01" // deadlock_detected
                | "57P01" // admin_shutdown
                | "57P02" // crash_shutdown
                | "57P03" // cannot_connect_now
        )
}

/// Check whether an SQLx error may go away on retry
pub fn is_transient(e: &SqlxError) -> bool {
    match e {
        SqlxError::Io(_)
        | SqlxError::Tls(_)
        | SqlxError::Protocol(_)
        | SqlxError::PoolTimedOut
        | SqlxError::PoolClosed
        | SqlxError::WorkerCrashed => true,
        SqlxError::Database(db_err) => db_err.code().is_some_and(|c| is_transient_sqlstate(&c)),
        _ => false,
    }
}

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    if is_transient(&e) {
        DomainError::DatabaseError(e.to_string())
    } else {
        DomainError::PersistenceRejected(e.to_string())
    }
}
