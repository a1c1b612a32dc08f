//! Typed error enum for the storage layer.
//!
//! Lets callers match on not-found and duplicate-number failures instead of
//! inspecting database error strings.

use thiserror::Error;

/// SQLSTATE for `unique_violation`.
const PG_UNIQUE_VIOLATION: &str = "23505";

/// SQLSTATE for `foreign_key_violation`.
const PG_FOREIGN_KEY_VIOLATION: &str = "23503";

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Row not found for expected-present entity.
    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// Unique constraint violation (card number reused within a set).
    #[error("duplicate: {0}")]
    Duplicate(String),

    /// SQL / connection / timeout failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Row data could not be converted into a domain type.
    #[error("data corruption: {context}")]
    DataCorruption {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Migration failure.
    #[error("migration error: {0}")]
    Migration(String),
}

impl StorageError {
    pub fn set_not_found(id: &str) -> Self {
        Self::NotFound { entity: "set", id: id.to_owned() }
    }

    pub fn card_not_found(id: &str) -> Self {
        Self::NotFound { entity: "card", id: id.to_owned() }
    }

    /// Whether this error is a unique-constraint violation.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// `RowNotFound` and the constraint SQLSTATEs get their own variants; the rest is `Database`.
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound { entity: "row", id: "unknown".into() },
            sqlx::Error::Database(db_err) if db_err.code().is_some_and(|c| c == PG_UNIQUE_VIOLATION) => {
                Self::Duplicate(db_err.message().to_owned())
            },
            sqlx::Error::Database(db_err)
                if db_err.code().is_some_and(|c| c == PG_FOREIGN_KEY_VIOLATION) =>
            {
                Self::NotFound { entity: "set", id: "unknown".into() }
            },
            _ => Self::Database(err),
        }
    }
}

impl From<stronghold_core::CoreError> for StorageError {
    fn from(err: stronghold_core::CoreError) -> Self {
        Self::DataCorruption { context: "stored value rejected by domain parser".to_owned(), source: Box::new(err) }
    }
}
