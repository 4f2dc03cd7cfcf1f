//! # CollectionHandle Trait
//!
//! Common read operations for collection-specific clients, built on top of a
//! generic [`CollectionClient`].
use crate::{CollectionClient, Document, StoreError};
use async_trait::async_trait;

/// Trait for collection-specific clients to inherit the plain read operations.
///
/// An implementor supplies the inner [`CollectionClient`] and a mapping from
/// [`StoreError`] to its own error type; `get` and `list` come for free. Mutations stay
/// on the concrete client, where they can validate first.
///
/// # Example
///
/// ```rust
/// use docstore::{CollectionClient, CollectionHandle, Document, StoreError};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Student { id: u32 }
/// #[derive(Debug)] struct StudentCreate;
/// #[derive(Debug)] struct StudentUpdate;
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct StudentError(String);
///
/// #[async_trait]
/// impl Document for Student {
///     type Id = u32; type Create = StudentCreate; type Update = StudentUpdate;
///     type Filter = (); type Action = (); type ActionResult = ();
///     type Context = (); type Error = StudentError;
///     const COLLECTION: &'static str = "students";
///     fn from_create_params(id: u32, _: StudentCreate) -> Result<Self, StudentError> { Ok(Self { id }) }
///     fn matches(&self, _: &()) -> bool { true }
///     async fn on_update(&mut self, _: StudentUpdate, _: &()) -> Result<(), StudentError> { Ok(()) }
///     async fn handle_action(&mut self, _: (), _: &()) -> Result<(), StudentError> { Ok(()) }
/// }
///
/// struct StudentClient { inner: CollectionClient<Student> }
///
/// #[async_trait]
/// impl CollectionHandle<Student> for StudentClient {
///     type Error = StudentError;
///     fn inner(&self) -> &CollectionClient<Student> { &self.inner }
///     fn map_error(e: StoreError) -> StudentError { StudentError(e.to_string()) }
/// }
///
/// async fn usage(client: StudentClient) {
///     // get() and list() are provided
///     let _ = client.get(1).await;
///     let _ = client.list().await;
/// }
/// ```
#[async_trait]
pub trait CollectionHandle<T: Document>: Send + Sync {
    /// The collection-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic client.
    fn inner(&self) -> &CollectionClient<T>;

    /// Map store errors to the collection's error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch one document by identifier.
    #[tracing::instrument(skip(self), fields(collection = T::COLLECTION))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch the whole collection.
    #[tracing::instrument(skip(self), fields(collection = T::COLLECTION))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }
}
