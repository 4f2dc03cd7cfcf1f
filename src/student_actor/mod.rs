//! Student collection: entity implementation, errors and factory.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Student;
use docstore::{CollectionActor, CollectionClient};

/// Creates a new student actor and its client.
pub fn new(capacity: usize) -> (CollectionActor<Student>, CollectionClient<Student>) {
    CollectionActor::new(capacity)
}
