//! Error types for the class collection.

use crate::model::StaffOnly;
use crate::validation::FormErrors;
use docstore::StoreError;
use thiserror::Error;

/// Errors that can occur during class operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClassError {
    /// The requested class was not found.
    #[error("Class not found: {0}")]
    NotFound(String),

    #[error("Invalid class: {0}")]
    Invalid(#[from] FormErrors),

    /// Another class already uses this name.
    #[error("A class with this name already exists: {0}")]
    AlreadyExists(String),

    #[error(transparent)]
    Forbidden(#[from] StaffOnly),

    /// An error occurred while communicating with the collection actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ClassError {
    fn from(msg: String) -> Self {
        ClassError::ActorCommunicationError(msg)
    }
}

impl From<StoreError> for ClassError {
    fn from(e: StoreError) -> Self {
        match e.downcast::<ClassError>() {
            Ok(err) => err,
            Err(StoreError::NotFound(id)) => ClassError::NotFound(id),
            Err(other) => ClassError::ActorCommunicationError(other.to_string()),
        }
    }
}
