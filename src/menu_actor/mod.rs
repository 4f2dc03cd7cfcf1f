//! # Menu Actor
//!
//! Owns the `menuItems` collection.
//!
//! - [`entity`] - [`Document`](docstore::Document) implementation for [`MenuItem`]
//! - [`error`] - [`MenuError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ```rust
//! use cafeteria::menu_actor;
//! use cafeteria::clients::MenuClient;
//! use cafeteria::model::{MenuItemForm, Session};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = menu_actor::new(32);
//!     let client = MenuClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     let form = MenuItemForm {
//!         name: "Falafel".to_string(),
//!         price: "18".to_string(),
//!         prep_time: "10".to_string(),
//!         ..Default::default()
//!     };
//!     let id = client.add_item(&Session::staff(), &form).await?;
//!     assert_eq!(client.find_by_name("Falafel").await?.map(|item| item.id), Some(id));
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::MenuItem;
use docstore::{CollectionActor, CollectionClient};

/// Creates a new menu actor and its client.
pub fn new(capacity: usize) -> (CollectionActor<MenuItem>, CollectionClient<MenuItem>) {
    CollectionActor::new(capacity)
}
