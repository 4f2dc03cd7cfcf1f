//! # Observability
//!
//! Structured logging for the store and everything built on it.
//!
//! Collection actors log with a `collection` field instead of a module path, so the
//! subscriber hides targets:
//!
//! ```text
//! INFO Actor started collection="orders"
//! INFO Created collection="orders" id=order_1 size=1
//! INFO Updated collection="orders" id=order_1
//! ```
//!
//! Verbosity comes from `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle and mutations
//! RUST_LOG=debug cargo run    # every request with its payload
//! RUST_LOG=docstore=debug,cafeteria=info cargo run
//! ```

/// Install the global subscriber. Call once, at the start of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
