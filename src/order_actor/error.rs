//! Error types for the order collection.

use crate::class_actor::ClassError;
use crate::model::StaffOnly;
use crate::validation::ValidationError;
use docstore::StoreError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// A required selection was missing at submission.
    #[error("Order validation error: {0}")]
    Validation(#[from] ValidationError),

    /// `advance` was requested on an order that is already delivered.
    #[error("Order already delivered: {0}")]
    AlreadyDelivered(String),

    #[error(transparent)]
    Forbidden(#[from] StaffOnly),

    /// Resolving the class failed for a reason other than the class being absent.
    #[error("Class lookup failed: {0}")]
    ClassLookup(#[from] ClassError),

    /// An error occurred while communicating with the collection actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}

impl From<StoreError> for OrderError {
    fn from(e: StoreError) -> Self {
        match e.downcast::<OrderError>() {
            Ok(err) => err,
            Err(StoreError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
