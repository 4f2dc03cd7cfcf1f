//! # docstore
//!
//! An in-process document store built from actors. Each collection (orders, menu items,
//! ...) is owned by one [`CollectionActor`] running in its own Tokio task; callers talk to
//! it through a cloneable [`CollectionClient`].
//!
//! ## Surface
//!
//! Every collection offers the same operations:
//!
//! | Operation | Client method | Notes |
//! |-----------|---------------|-------|
//! | get-all | [`CollectionClient::list`] | insertion order |
//! | get-by-field | [`CollectionClient::find`] | typed [`Document::Filter`] |
//! | add | [`CollectionClient::add`] | returns the generated id |
//! | update | [`CollectionClient::update`] | partial record, returns the new state |
//! | delete | [`CollectionClient::delete`] | |
//! | get | [`CollectionClient::get`] | `None` when absent |
//! | action | [`CollectionClient::perform_action`] | collection-specific |
//!
//! ## Semantics
//!
//! - Requests to one collection are applied one at a time, in arrival order. Concurrent
//!   writers to the same document get last-write-wins.
//! - A failed hook or action leaves the stored document untouched.
//! - There is no retry, no versioning and nothing is written to disk.
//!
//! ## Wiring
//!
//! Dependencies are injected at `run(context)` rather than at construction, so a
//! collection can hold clients of collections created alongside it.
//!
//! ## Testing
//!
//! [`mock::MockCollection`] answers a real client from scripted expectations, which makes
//! it possible to assert that a request was never sent.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod document;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::CollectionActor;
pub use client::CollectionClient;
pub use client_trait::CollectionHandle;
pub use document::Document;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
