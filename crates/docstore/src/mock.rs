//! # Mock Collections & Testing Guide
//!
//! `MockCollection<T>` hands out a real [`CollectionClient<T>`] whose requests are answered
//! from a queue of scripted expectations instead of an actor. Use it to test logic that
//! *uses* a collection (validation in a typed client, a hook that looks up another
//! collection) without running that collection.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockCollection | Real Actor |
//! |---------|----------------|------------|
//! | **State** | None, scripted replies | Real documents |
//! | **Determinism** | Fully deterministic | Subject to scheduler |
//! | **Error Injection** | `return_err` | Needs a specific state |
//! | **Use Case** | Logic around a client | The collection itself, full system |
//!
//! ## Asserting that nothing was sent
//!
//! Validation that must happen before the store is contacted is tested by scripting no
//! expectations and checking [`MockCollection::requests_seen`] afterwards:
//!
//! ```rust
//! use docstore::mock::MockCollection;
//! use docstore::{Document, StoreError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Order { id: u32 }
//! #[derive(Debug)] struct OrderCreate;
//! #[derive(Debug)] struct OrderUpdate;
//! #[derive(Debug, thiserror::Error)] #[error("order error")] struct OrderError;
//!
//! #[async_trait]
//! impl Document for Order {
//!     type Id = u32; type Create = OrderCreate; type Update = OrderUpdate;
//!     type Filter = (); type Action = (); type ActionResult = ();
//!     type Context = (); type Error = OrderError;
//!     const COLLECTION: &'static str = "orders";
//!     fn from_create_params(id: u32, _: OrderCreate) -> Result<Self, OrderError> { Ok(Self { id }) }
//!     fn matches(&self, _: &()) -> bool { true }
//!     async fn on_update(&mut self, _: OrderUpdate, _: &()) -> Result<(), OrderError> { Ok(()) }
//!     async fn handle_action(&mut self, _: (), _: &()) -> Result<(), OrderError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockCollection::<Order>::new();
//!     let _client = mock.client();
//!
//!     // ... code under test rejects the input before calling the client ...
//!
//!     assert_eq!(mock.requests_seen(), 0);
//!     mock.verify();
//! }
//! ```
//!
//! ## Simulating store failures
//!
//! ```rust,ignore
//! mock.expect_update(order_id).return_err(StoreError::ActorClosed);
//! let result = order_client.set_status(&staff, order_id, OrderStatus::Delivered).await;
//! assert!(result.is_err());
//! ```
//!
//! A request that arrives with no matching expectation is answered with
//! [`StoreError::ActorDropped`] and recorded; [`MockCollection::verify`] then panics.

use crate::client::CollectionClient;
use crate::document::Document;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATIONS
// =============================================================================

/// A scripted reply to one expected request.
enum Expectation<T: Document> {
    Get(Result<Option<T>, StoreError>),
    List(Result<Vec<T>, StoreError>),
    Find(Result<Vec<T>, StoreError>),
    Add(Result<T::Id, StoreError>),
    Update(Result<T, StoreError>),
    Delete(Result<(), StoreError>),
    Action(Result<T::ActionResult, StoreError>),
}

impl<T: Document> Expectation<T> {
    fn kind(&self) -> &'static str {
        match self {
            Expectation::Get(_) => "get",
            Expectation::List(_) => "list",
            Expectation::Find(_) => "find",
            Expectation::Add(_) => "add",
            Expectation::Update(_) => "update",
            Expectation::Delete(_) => "delete",
            Expectation::Action(_) => "action",
        }
    }
}

/// An expectation plus the identifier the request must carry, if any.
struct Scripted<T: Document> {
    id: Option<T::Id>,
    reply: Expectation<T>,
}

struct MockState<T: Document> {
    expectations: VecDeque<Scripted<T>>,
    unexpected: Vec<String>,
}

/// A scripted stand-in for a collection actor.
///
/// Expectations are consumed in the order they were declared. Identifiers passed to
/// `expect_*` are checked against the incoming request.
pub struct MockCollection<T: Document> {
    client: CollectionClient<T>,
    state: Arc<Mutex<MockState<T>>>,
    seen: Arc<AtomicUsize>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Document> Default for MockCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Document> MockCollection<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let state = Arc::new(Mutex::new(MockState {
            expectations: VecDeque::new(),
            unexpected: Vec::new(),
        }));
        let seen = Arc::new(AtomicUsize::new(0));
        let task_state = state.clone();
        let task_seen = seen.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                task_seen.fetch_add(1, Ordering::SeqCst);
                let mut guard = task_state.lock().unwrap();
                let expectation = guard.expectations.pop_front();
                if let Some(mismatch) = answer(request, expectation) {
                    guard.unexpected.push(mismatch);
                }
            }
        });

        Self {
            client: CollectionClient::new(sender),
            state,
            seen,
            _handle: handle,
        }
    }

    /// A client wired to this mock.
    pub fn client(&self) -> CollectionClient<T> {
        self.client.clone()
    }

    /// Number of requests received so far, expected or not.
    pub fn requests_seen(&self) -> usize {
        self.seen.load(Ordering::SeqCst)
    }

    pub fn expect_get(&self, id: T::Id) -> Expect<'_, T, Option<T>> {
        Expect::new(self, Some(id), Expectation::Get)
    }

    pub fn expect_list(&self) -> Expect<'_, T, Vec<T>> {
        Expect::new(self, None, Expectation::List)
    }

    pub fn expect_find(&self) -> Expect<'_, T, Vec<T>> {
        Expect::new(self, None, Expectation::Find)
    }

    pub fn expect_add(&self) -> Expect<'_, T, T::Id> {
        Expect::new(self, None, Expectation::Add)
    }

    pub fn expect_update(&self, id: T::Id) -> Expect<'_, T, T> {
        Expect::new(self, Some(id), Expectation::Update)
    }

    pub fn expect_delete(&self, id: T::Id) -> Expect<'_, T, ()> {
        Expect::new(self, Some(id), Expectation::Delete)
    }

    pub fn expect_action(&self, id: T::Id) -> Expect<'_, T, T::ActionResult> {
        Expect::new(self, Some(id), Expectation::Action)
    }

    /// Panics unless every expectation was consumed by a matching request.
    pub fn verify(&self) {
        let guard = self.state.lock().unwrap();
        if !guard.unexpected.is_empty() {
            panic!("Unexpected requests: {:?}", guard.unexpected);
        }
        if !guard.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                guard.expectations.len()
            );
        }
    }

    fn push(&self, id: Option<T::Id>, reply: Expectation<T>) {
        let mut guard = self.state.lock().unwrap();
        guard.expectations.push_back(Scripted { id, reply });
    }
}

/// Builder returned by the `expect_*` methods.
pub struct Expect<'a, T: Document, R> {
    mock: &'a MockCollection<T>,
    id: Option<T::Id>,
    make: fn(Result<R, StoreError>) -> Expectation<T>,
}

impl<'a, T: Document, R> Expect<'a, T, R> {
    fn new(
        mock: &'a MockCollection<T>,
        id: Option<T::Id>,
        make: fn(Result<R, StoreError>) -> Expectation<T>,
    ) -> Self {
        Self { mock, id, make }
    }

    /// Answer the request successfully with `value`.
    pub fn return_ok(self, value: R) {
        self.mock.push(self.id, (self.make)(Ok(value)));
    }

    /// Answer the request with `error`.
    pub fn return_err(self, error: StoreError) {
        self.mock.push(self.id, (self.make)(Err(error)));
    }
}

/// Reply to `request` from `scripted`; returns a description of any mismatch.
fn answer<T: Document>(request: StoreRequest<T>, scripted: Option<Scripted<T>>) -> Option<String> {
    let Some(Scripted { id, reply }) = scripted else {
        // Dropping the request drops its reply channel: the caller sees ActorDropped.
        return Some(format!("{} while expecting nothing", request_kind(&request)));
    };
    if let (Some(expected), Some(actual)) = (&id, request_id(&request)) {
        if expected != actual {
            return Some(format!(
                "{} for {} while expecting {}",
                request_kind(&request),
                actual,
                expected
            ));
        }
    }
    match (request, reply) {
        (StoreRequest::Get { respond_to, .. }, Expectation::Get(r)) => {
            let _ = respond_to.send(r);
            None
        }
        (StoreRequest::List { respond_to }, Expectation::List(r)) => {
            let _ = respond_to.send(r);
            None
        }
        (StoreRequest::Find { respond_to, .. }, Expectation::Find(r)) => {
            let _ = respond_to.send(r);
            None
        }
        (StoreRequest::Add { respond_to, .. }, Expectation::Add(r)) => {
            let _ = respond_to.send(r);
            None
        }
        (StoreRequest::Update { respond_to, .. }, Expectation::Update(r)) => {
            let _ = respond_to.send(r);
            None
        }
        (StoreRequest::Delete { respond_to, .. }, Expectation::Delete(r)) => {
            let _ = respond_to.send(r);
            None
        }
        (StoreRequest::Action { respond_to, .. }, Expectation::Action(r)) => {
            let _ = respond_to.send(r);
            None
        }
        (request, reply) => Some(format!(
            "{} while expecting {}",
            request_kind(&request),
            reply.kind()
        )),
    }
}

fn request_id<T: Document>(request: &StoreRequest<T>) -> Option<&T::Id> {
    match request {
        StoreRequest::Get { id, .. }
        | StoreRequest::Update { id, .. }
        | StoreRequest::Delete { id, .. }
        | StoreRequest::Action { id, .. } => Some(id),
        StoreRequest::Add { .. } | StoreRequest::List { .. } | StoreRequest::Find { .. } => None,
    }
}

fn request_kind<T: Document>(request: &StoreRequest<T>) -> &'static str {
    match request {
        StoreRequest::Get { .. } => "get",
        StoreRequest::List { .. } => "list",
        StoreRequest::Find { .. } => "find",
        StoreRequest::Add { .. } => "add",
        StoreRequest::Update { .. } => "update",
        StoreRequest::Delete { .. } => "delete",
        StoreRequest::Action { .. } => "action",
    }
}
