//! Type-safe wrappers around [`CollectionClient`](docstore::CollectionClient).
//!
//! Each client checks the caller's [`Session`](crate::model::Session) and validates
//! input before anything is sent to its collection, so a rejected request never
//! reaches the store. `get` and `list` come from
//! [`CollectionHandle`](docstore::CollectionHandle).

pub mod class_client;
pub mod menu_client;
pub mod order_client;
pub mod student_client;

pub use class_client::*;
pub use menu_client::*;
pub use order_client::*;
pub use student_client::*;
