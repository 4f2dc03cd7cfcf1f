//! # Order Actor
//!
//! Owns the `orders` collection and the order lifecycle.
//!
//! ## Structure
//!
//! - [`entity`] - [`Document`](docstore::Document) implementation for [`Order`]
//! - [`error`] - [`OrderError`]
//! - [`actions`] - [`OrderAction`] and [`OrderActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependencies
//!
//! The actor runs with a [`ClassClient`](crate::clients::ClassClient) as its context:
//!
//! ```rust,ignore
//! let (class_actor, class_client) = class_actor::new(32);
//! let (order_actor, order_client) = order_actor::new(32);
//! tokio::spawn(class_actor.run(()));
//! tokio::spawn(order_actor.run(ClassClient::new(class_client)));
//! ```
//!
//! ## Status flow
//!
//! Orders start as `preparing`. Staff either set a status directly (any value) or
//! [`OrderAction::Advance`] one step at a time. Delivered orders leave the active list
//! and show up in history; orders are never deleted in the normal flow.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Order;
use docstore::{CollectionActor, CollectionClient};

/// Creates a new order actor and its client.
pub fn new(capacity: usize) -> (CollectionActor<Order>, CollectionClient<Order>) {
    CollectionActor::new(capacity)
}
