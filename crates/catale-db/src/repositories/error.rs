//! Error handling utilities for repositories

use catale_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Map a unique violation to a domain error, anything else to `DatabaseError`
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    match e.as_database_error() {
        Some(db_err) if db_err.is_unique_violation() => on_unique(),
        _ => map_db_error(e),
    }
}

/// Map a foreign key violation on a row owned by a member and tied to a
/// cocktail. Anything else becomes `DatabaseError`.
pub fn map_foreign_key_violation(e: SqlxError, member_id: i64, cocktail_id: i64) -> DomainError {
    match e.as_database_error() {
        Some(db_err) if db_err.is_foreign_key_violation() => {
            missing_referent(db_err.constraint(), member_id, cocktail_id)
        }
        _ => map_db_error(e),
    }
}

/// Pick the missing parent from the violated constraint name.
/// Postgres names these `<table>_<column>_fkey`.
fn missing_referent(constraint: Option<&str>, member_id: i64, cocktail_id: i64) -> DomainError {
    match constraint {
        Some(name) if name.contains("member_id") => DomainError::MemberNotFound(member_id),
        _ => DomainError::CocktailNotFound(cocktail_id),
    }
}
