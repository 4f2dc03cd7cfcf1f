//! Stored documents, their payloads and the caller session.

pub mod classroom;
pub mod menu_item;
pub mod order;
pub mod session;
pub mod student;

pub use classroom::*;
pub use menu_item::*;
pub use order::*;
pub use session::*;
pub use student::*;
