//! Error handling utilities for repositories

use atlas_core::error::DomainError;
use atlas_core::value_objects::{Id, SubjectKind};
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for a foreign key violation and map it via the violated constraint
/// name; anything else becomes a DatabaseError.
///
/// PostgreSQL names FK constraints `<table>_<column>_fkey`, so callers match
/// on the referencing column to decide which entity was missing.
pub fn map_fk_violation<F>(e: SqlxError, on_fk: F) -> DomainError
where
    F: FnOnce(&str) -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            let constraint = db_err.constraint().unwrap_or_default().to_string();
            return on_fk(&constraint);
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: Id) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "place not found" error
pub fn place_not_found(id: Id) -> DomainError {
    DomainError::PlaceNotFound(id)
}

/// Create a not-found error for a report subject
pub fn subject_not_found(kind: SubjectKind, id: Id) -> DomainError {
    DomainError::subject_not_found(kind, id)
}
