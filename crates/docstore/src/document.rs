//! # Document Trait
//!
//! The `Document` trait is the contract every stored record (an order, a menu item, a class,
//! a student) implements so that a generic [`CollectionActor`](crate::CollectionActor) can own
//! a collection of them. It names the associated types for identifiers, DTOs, field filters,
//! custom actions, injected context and errors, and provides the lifecycle hooks
//! (`on_create`, `on_update`, `on_delete`, `handle_action`).
//!
//! # Provided Methods (Hooks)
//! - [`Document::on_create`]
//! - [`Document::on_delete`]
//!
//! Both default to `Ok(())`. Override them only when a collection needs a side effect
//! (for example resolving a reference through another collection's client).

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any stored record must implement to be managed by a `CollectionActor`.
///
/// # Associated Types
/// Each collection gets its own payload types. An `Order` collection accepts an
/// `OrderCreate` and filters with an `OrderFilter`; it cannot be handed a `StudentCreate`.
///
/// # Async & Context
/// The hooks are `#[async_trait]` so they can await other collections. The `Context`
/// type is handed to `run()` and injected into every hook, which lets collections be
/// wired together after they have been constructed.
#[async_trait]
pub trait Document: Clone + Send + Sync + 'static {
    /// Store-assigned identifier.
    ///
    /// Identifiers are generated from a per-collection counter, so they must be
    /// constructible from `u32`. `Ord` keeps listings in insertion order.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to add a new record.
    type Create: Send + Sync + Debug;

    /// A partial record applied by `update`.
    type Update: Send + Sync + Debug;

    /// Field predicate used by `find` (the store's get-by-field).
    type Filter: Send + Sync + Debug;

    /// Collection-specific operations beyond CRUD.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into the actor at `run()`. Use `()` when there are none.
    type Context: Send + Sync;

    /// The error type for this collection.
    ///
    /// Hook failures are boxed into [`StoreError::DocumentError`](crate::StoreError::DocumentError)
    /// and can be recovered on the client side with
    /// [`StoreError::downcast`](crate::StoreError::downcast).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Collection name used in logs (e.g. `"orders"`).
    const COLLECTION: &'static str;

    /// Build the full record from its new identifier and the create payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this record satisfies `filter`.
    fn matches(&self, filter: &Self::Filter) -> bool;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the record is built and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply a partial update.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the record is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a collection-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
