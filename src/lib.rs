//! # Cafeteria
//!
//! > **School cafeteria ordering on top of an actor-backed document store.**
//!
//! Students build a cart from the menu and submit orders to a class; staff manage the
//! menu, classes and students, move orders from the kitchen to the classroom and read
//! dashboards of revenue and popular dishes.
//!
//! ## Architecture Notes
//!
//! ### 1. Collections as actors
//! The four collections (`orders`, `menuItems`, `classes`, `students`) are each owned by
//! a [`docstore::CollectionActor`] in its own Tokio task. Requests to one collection are
//! applied one at a time; two staff members changing the same order get
//! last-write-wins.
//!
//! ### 2. Explicit sessions
//! Operations that depend on who is calling take a [`Session`](model::Session).
//! Staff-only mutations from a student session fail with `Forbidden` before the store is
//! contacted.
//!
//! ### 3. Validate, then persist
//! Clients check selections and forms first ([`validation`]), so a rejected request
//! leaves no trace in any collection. Views update only after the store confirms.
//!
//! ### 4. Pure reporting
//! [`reports::Dashboard`] is computed from an in-memory snapshot of orders plus a
//! [`lookup::Directory`]; it never talks to the store.
//!
//! ## Module Tour
//!
//! - [`model`] - documents, payloads, ids and the session
//! - [`cart`] - the in-progress order
//! - [`validation`] - order preconditions and staff form rules
//! - [`lookup`] - resolving student and menu references, with "Unknown" placeholders
//! - [`reports`] - dashboard aggregates
//! - [`order_actor`], [`menu_actor`], [`class_actor`], [`student_actor`] - document
//!   implementations, errors and factories
//! - [`clients`] - typed clients wrapping each collection
//! - [`views`] - active orders and searchable history
//! - [`lifecycle`] - system wiring, configuration and demo data
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod cart;
pub mod class_actor;
pub mod clients;
pub mod lifecycle;
pub mod lookup;
pub mod menu_actor;
pub mod model;
pub mod order_actor;
pub mod reports;
pub mod student_actor;
pub mod validation;
pub mod views;
