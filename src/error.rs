//! Error types returned by the storage layer.

use sea_orm::DbErr;

/// Errors produced by connection, schema and repository operations.
///
/// "Not found" is never an error: single-row lookups return `Ok(None)` and
/// list lookups return an empty `Vec`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store unreachable: {0}")]
    Connection(#[source] DbErr),

    #[error("Failed to create table '{table}': {source}")]
    Schema {
        table: &'static str,
        #[source]
        source: DbErr,
    },

    #[error("Read failed ({context}): {source}")]
    Read {
        context: &'static str,
        #[source]
        source: DbErr,
    },

    #[error("Write failed ({context}): {source}")]
    Write {
        context: &'static str,
        #[source]
        source: DbErr,
    },

    #[error("Invalid input: {0}")]
    Validation(String),
}

impl StoreError {
    /// Build a `map_err` adapter tagging a read failure with its context.
    pub fn read(context: &'static str) -> impl FnOnce(DbErr) -> Self {
        move |source| Self::Read { context, source }
    }

    /// Build a `map_err` adapter tagging a write failure with its context.
    pub fn write(context: &'static str) -> impl FnOnce(DbErr) -> Self {
        move |source| Self::Write { context, source }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
