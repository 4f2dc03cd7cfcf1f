//! # Collection Actor
//!
//! `CollectionActor` owns one collection of documents and answers requests for it.
//! It is the "server" half of a collection: requests are processed one at a time, so the
//! map it owns needs no lock.

use crate::client::CollectionClient;
use crate::document::Document;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that owns a collection of documents.
///
/// # Concurrency Model
/// Each collection runs in its own Tokio task and handles its requests sequentially.
/// Two sessions updating the same document are served in arrival order and the later
/// write wins; there is no version check.
///
/// # Usage Pattern
///
/// 1.  **Create**: `CollectionActor::new()` returns the actor and a cloneable client.
/// 2.  **Wire**: pass the collection's dependencies into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use docstore::{CollectionActor, Document};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Note { id: u32, text: String }
/// #[derive(Debug)] struct NoteCreate { text: String }
/// #[derive(Debug)] struct NoteUpdate;
/// #[derive(Debug)] struct NoteFilter(String);
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl Document for Note {
///     type Id = u32;
///     type Create = NoteCreate;
///     type Update = NoteUpdate;
///     type Filter = NoteFilter;
///     type Action = ();
///     type ActionResult = ();
///     type Context = ();
///     type Error = NoteError;
///     const COLLECTION: &'static str = "notes";
///
///     fn from_create_params(id: u32, p: NoteCreate) -> Result<Self, NoteError> { Ok(Self { id, text: p.text }) }
///     fn matches(&self, f: &NoteFilter) -> bool { self.text == f.0 }
///     async fn on_update(&mut self, _: NoteUpdate, _: &()) -> Result<(), NoteError> { Ok(()) }
///     async fn handle_action(&mut self, _: (), _: &()) -> Result<(), NoteError> { Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = CollectionActor::<Note>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let id = client.add(NoteCreate { text: "hello".into() }).await.unwrap();
///     let found = client.find(NoteFilter("hello".into())).await.unwrap();
///     assert_eq!(found[0].id, id);
/// }
/// ```
///
/// # Operations
///
/// * **Add**: assigns the next identifier, builds the record, runs `on_create`, stores it.
/// * **Get**: clone of the record, or `None`.
/// * **List**: every record in identifier (insertion) order.
/// * **Find**: the records for which [`Document::matches`] holds, in the same order.
/// * **Update**: runs `on_update` against the stored record and returns the new state.
///   A failed hook leaves the stored record unchanged.
/// * **Delete**: runs `on_delete` then removes the record.
/// * **Action**: runs `handle_action` against the stored record. A failed action leaves
///   the stored record unchanged.
pub struct CollectionActor<T: Document> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: Document> CollectionActor<T> {
    /// Creates a new `CollectionActor` and its associated `CollectionClient`.
    ///
    /// `buffer_size` is the request channel capacity; callers wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, CollectionClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        let client = CollectionClient::new(sender);
        (actor, client)
    }

    /// Runs the request loop until every client has been dropped.
    ///
    /// `context` is handed to every hook of every document in the collection.
    pub async fn run(mut self, context: T::Context) {
        let collection = T::COLLECTION;
        info!(collection, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Add { params, respond_to } => {
                    debug!(collection, ?params, "Add");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut doc) => {
                            if let Err(e) = doc.on_create(&context).await {
                                warn!(collection, error = %e, "on_create failed");
                                let _ = respond_to.send(Err(StoreError::DocumentError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), doc);
                            info!(collection, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(collection, error = %e, "Add rejected");
                            let _ = respond_to.send(Err(StoreError::DocumentError(Box::new(e))));
                        }
                    }
                }
                StoreRequest::Get { id, respond_to } => {
                    let doc = self.store.get(&id).cloned();
                    debug!(collection, %id, found = doc.is_some(), "Get");
                    let _ = respond_to.send(Ok(doc));
                }
                StoreRequest::List { respond_to } => {
                    debug!(collection, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                StoreRequest::Find { filter, respond_to } => {
                    let docs: Vec<T> = self
                        .store
                        .values()
                        .filter(|doc| doc.matches(&filter))
                        .cloned()
                        .collect();
                    debug!(collection, ?filter, matched = docs.len(), "Find");
                    let _ = respond_to.send(Ok(docs));
                }
                StoreRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(collection, %id, ?update, "Update");
                    let Some(current) = self.store.get(&id) else {
                        warn!(collection, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        continue;
                    };
                    let mut next = current.clone();
                    if let Err(e) = next.on_update(update, &context).await {
                        warn!(collection, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(StoreError::DocumentError(Box::new(e))));
                        continue;
                    }
                    self.store.insert(id.clone(), next.clone());
                    info!(collection, %id, "Updated");
                    let _ = respond_to.send(Ok(next));
                }
                StoreRequest::Delete { id, respond_to } => {
                    debug!(collection, %id, "Delete");
                    if let Some(doc) = self.store.get(&id) {
                        if let Err(e) = doc.on_delete(&context).await {
                            warn!(collection, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(StoreError::DocumentError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(collection, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(collection, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
                StoreRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(collection, %id, ?action, "Action");
                    let Some(current) = self.store.get(&id) else {
                        warn!(collection, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        continue;
                    };
                    let mut next = current.clone();
                    match next.handle_action(action, &context).await {
                        Ok(result) => {
                            self.store.insert(id.clone(), next);
                            info!(collection, %id, "Action ok");
                            let _ = respond_to.send(Ok(result));
                        }
                        Err(e) => {
                            warn!(collection, %id, error = %e, "Action failed");
                            let _ = respond_to.send(Err(StoreError::DocumentError(Box::new(e))));
                        }
                    }
                }
            }
        }

        info!(collection, size = self.store.len(), "Shutdown");
    }
}
