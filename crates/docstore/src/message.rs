//! # Store Requests
//!
//! The request type carried over the channel between a
//! [`CollectionClient`](crate::CollectionClient) and its
//! [`CollectionActor`](crate::CollectionActor).

use crate::document::Document;
use crate::error::StoreError;
use tokio::sync::oneshot;

/// One-shot reply channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// A request against one collection.
///
/// The variants are the document store's CRUD surface (`add`, `get`, `list`,
/// `find`, `update`, `delete`) plus `Action` for collection-specific operations.
/// All payload types come from the [`Document`] associated types, so a request
/// built for one collection cannot be sent to another.
#[derive(Debug)]
pub enum StoreRequest<T: Document> {
    Add {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Find {
        filter: T::Filter,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
