//! Typed error enum for the service layer.
//!
//! Callers match on invalid input, not-found and storage failures instead of
//! inspecting message strings.

use stronghold_core::CoreError;
use stronghold_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, not found, duplicate, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Caller provided invalid input. The message is shown to the client as-is.
    #[error("{0}")]
    InvalidInput(String),

    /// Requested set or card does not exist.
    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },
}

impl ServiceError {
    pub(crate) fn set_not_found(id: &str) -> Self {
        Self::NotFound { entity: "set", id: id.to_owned() }
    }

    /// Not-found from either layer. Returns the entity name when it is one.
    pub fn not_found_entity(&self) -> Option<&'static str> {
        match self {
            Self::NotFound { entity, .. } | Self::Storage(StorageError::NotFound { entity, .. }) => {
                Some(*entity)
            },
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.not_found_entity().is_some()
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_duplicate())
    }
}

impl From<CoreError> for ServiceError {
    fn from(err: CoreError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
