//! # Class Actor
//!
//! Owns the `classes` collection. Orders look classes up by name when they are
//! submitted, to copy the room code onto the order.
//!
//! - [`entity`] - [`Document`](docstore::Document) implementation for [`ClassRoom`]
//! - [`error`] - [`ClassError`]
//! - [`new()`] - Factory function that creates the actor and client

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::ClassRoom;
use docstore::{CollectionActor, CollectionClient};

/// Creates a new class actor and its client.
pub fn new(capacity: usize) -> (CollectionActor<ClassRoom>, CollectionClient<ClassRoom>) {
    CollectionActor::new(capacity)
}
