//! # Collection Client
//!
//! The sending half of a collection: a cheap, cloneable handle that turns method calls
//! into [`StoreRequest`]s and awaits the reply.

use crate::document::Document;
use crate::error::StoreError;
use crate::message::StoreRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for one collection.
///
/// Holds only the channel sender, so cloning it is inexpensive and every clone talks
/// to the same actor. The actor stops once all clones are dropped.
pub struct CollectionClient<T: Document> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

// Manual impl: `T` itself need not be `Clone` for the sender to be.
impl<T: Document> Clone for CollectionClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Document> CollectionClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, StoreError>>) -> StoreRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    /// Store a new document and return its generated identifier.
    pub async fn add(&self, params: T::Create) -> Result<T::Id, StoreError> {
        self.request(|respond_to| StoreRequest::Add { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        self.request(|respond_to| StoreRequest::Get { id, respond_to })
            .await
    }

    /// Every document in the collection, in insertion order.
    pub async fn list(&self) -> Result<Vec<T>, StoreError> {
        self.request(|respond_to| StoreRequest::List { respond_to })
            .await
    }

    /// Documents matching `filter`, in insertion order.
    pub async fn find(&self, filter: T::Filter) -> Result<Vec<T>, StoreError> {
        self.request(|respond_to| StoreRequest::Find { filter, respond_to })
            .await
    }

    /// Apply a partial update and return the stored result.
    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), StoreError> {
        self.request(|respond_to| StoreRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, StoreError> {
        self.request(|respond_to| StoreRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }
}
