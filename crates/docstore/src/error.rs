//! # Store Errors
//!
//! Errors raised by the collection actors and their clients. Every collection maps these
//! into its own error type, so callers only ever match on one enum per collection.

/// Errors that can occur inside the document store itself.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Collection actor closed")]
    ActorClosed,
    #[error("Collection actor dropped response channel")]
    ActorDropped,
    #[error("Document not found: {0}")]
    NotFound(String),
    #[error("Document error: {0}")]
    DocumentError(Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Recover the collection's own error type from a [`StoreError::DocumentError`].
    ///
    /// Returns the original `StoreError` when it carries something else.
    pub fn downcast<E>(self) -> Result<E, StoreError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            StoreError::DocumentError(inner) => match inner.downcast::<E>() {
                Ok(e) => Ok(*e),
                Err(inner) => Err(StoreError::DocumentError(inner)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("price must be positive")]
    struct PriceError;

    #[derive(Debug, thiserror::Error)]
    #[error("other")]
    struct OtherError;

    #[test]
    fn test_downcast_recovers_document_error() {
        let err = StoreError::DocumentError(Box::new(PriceError));
        assert_eq!(err.downcast::<PriceError>().unwrap(), PriceError);
    }

    #[test]
    fn test_downcast_keeps_foreign_errors() {
        let err = StoreError::DocumentError(Box::new(OtherError));
        let back = err.downcast::<PriceError>().unwrap_err();
        assert!(matches!(back, StoreError::DocumentError(_)));

        let closed = StoreError::ActorClosed.downcast::<PriceError>().unwrap_err();
        assert!(matches!(closed, StoreError::ActorClosed));
    }
}
