//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and shutting down the collection actors.
//!
//! ## The CafeteriaSystem Pattern
//!
//! [`CafeteriaSystem::new`] creates every collection first, then starts each actor with
//! its dependencies injected through `run(context)`:
//!
//! ```rust,ignore
//! let (class_actor, class_client) = class_actor::new(capacity);
//! let (order_actor, order_client) = order_actor::new(capacity);
//!
//! tokio::spawn(class_actor.run(()));
//! tokio::spawn(order_actor.run(ClassClient::new(class_client)));
//! ```
//!
//! Only the order collection has a dependency (the class client it uses to resolve
//! rooms), so the graph is acyclic and shutdown by dropping clients is enough.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - [`CafeteriaSystem::shutdown`] joins every task
//!
//! ## Configuration
//!
//! [`Config::load`] reads the environment; see [`config`] for the variables.
//!
//! ## Demo data
//!
//! [`seed()`] fills an empty system through the public clients and
//! [`CafeteriaSystem::reset`] empties it again.

pub mod cafeteria_system;
pub mod config;
pub mod seed;

pub use cafeteria_system::*;
pub use config::*;
pub use seed::{seed, SeedSummary};
