//! Error types for the student collection.

use crate::model::StaffOnly;
use crate::validation::FormErrors;
use docstore::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StudentError {
    #[error("Student not found: {0}")]
    NotFound(String),

    #[error("Invalid student: {0}")]
    Invalid(#[from] FormErrors),

    /// Another student already has this student id.
    #[error("A student with this ID already exists: {0}")]
    AlreadyExists(String),

    #[error(transparent)]
    Forbidden(#[from] StaffOnly),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for StudentError {
    fn from(msg: String) -> Self {
        StudentError::ActorCommunicationError(msg)
    }
}

impl From<StoreError> for StudentError {
    fn from(e: StoreError) -> Self {
        match e.downcast::<StudentError>() {
            Ok(err) => err,
            Err(StoreError::NotFound(id)) => StudentError::NotFound(id),
            Err(other) => StudentError::ActorCommunicationError(other.to_string()),
        }
    }
}
