//! Error types for the menu collection.

use crate::model::StaffOnly;
use crate::validation::FormErrors;
use docstore::StoreError;
use thiserror::Error;

/// Errors that can occur during menu operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// The requested menu item was not found.
    #[error("Menu item not found: {0}")]
    NotFound(String),

    /// The menu form failed validation.
    #[error("Invalid menu item: {0}")]
    Invalid(#[from] FormErrors),

    #[error(transparent)]
    Forbidden(#[from] StaffOnly),

    /// An error occurred while communicating with the collection actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for MenuError {
    fn from(msg: String) -> Self {
        MenuError::ActorCommunicationError(msg)
    }
}

impl From<StoreError> for MenuError {
    fn from(e: StoreError) -> Self {
        match e.downcast::<MenuError>() {
            Ok(err) => err,
            Err(StoreError::NotFound(id)) => MenuError::NotFound(id),
            Err(other) => MenuError::ActorCommunicationError(other.to_string()),
        }
    }
}
