//! Repository Module
//!
//! CRUD operations over the SQLite store, as free functions taking a
//! `&SqlitePool`. Runtime-checked sqlx queries throughout.

// Shipping
pub mod shipping_method;
pub mod shipping_rate;
pub mod shipping_zone;

// Bundles
pub mod bundle;
pub mod bundle_configuration;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        // Unique-index conflicts get their own variant: generated sku /
        // share_token collisions are retried by the caller, not surfaced.
        if let sqlx::Error::Database(ref db_err) = err
            && db_err.is_unique_violation()
        {
            return RepoError::Duplicate(db_err.message().to_string());
        }
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
