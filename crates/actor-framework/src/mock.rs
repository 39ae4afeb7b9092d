//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are
//! answered from a queue of expectations instead of a running actor. Code
//! that composes several services (the usual reason to mock) can then be
//! tested deterministically, including failures that are awkward to provoke
//! with a real actor such as a closed channel or a timeout.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None, answers are scripted | Real store |
//! | **Use Case** | Logic *around* the client | The actor itself or the full system |
//! | **Error Injection** | `return_err` | Requires specific state |
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//! use std::convert::Infallible;
//!
//! #[derive(Clone, Debug)] struct Account { id: u32 }
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct AccountError;
//!
//! #[async_trait]
//! impl ActorEntity for Account {
//!     type Id = u32; type Create = (); type Update = Infallible; type Query = ();
//!     type Error = AccountError;
//!     fn id(&self) -> &u32 { &self.id }
//!     fn from_create_params(id: u32, _: ()) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn on_update(&mut self, update: Infallible) -> Result<(), Self::Error> { match update {} }
//!     fn matches(&self, _: &()) -> bool { true }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Account>::new();
//!     let client = mock.client();
//!
//!     // Simulate a downstream failure
//!     mock.expect_get().return_err(FrameworkError::ActorClosed);
//!
//!     let result = client.get(1).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! Use [`create_mock_client`] together with the receiver helpers
//! ([`expect_get_many`], [`expect_put`], ...) when a test needs to inspect the
//! exact request a client sent.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// A scripted answer for the next request of the matching kind.
enum Expectation<T: ActorEntity> {
    Create(Result<T, FrameworkError>),
    Put(Result<T::Id, FrameworkError>),
    Get(Result<Option<T>, FrameworkError>),
    GetMany(Result<Vec<T>, FrameworkError>),
    List(Result<Vec<T>, FrameworkError>),
    Update(Result<T, FrameworkError>),
}

impl<T: ActorEntity> Expectation<T> {
    fn kind(&self) -> &'static str {
        match self {
            Expectation::Create(_) => "Create",
            Expectation::Put(_) => "Put",
            Expectation::Get(_) => "Get",
            Expectation::GetMany(_) => "GetMany",
            Expectation::List(_) => "List",
            Expectation::Update(_) => "Update",
        }
    }
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in the order they were registered. A request that
/// does not match the next expectation, or arrives when none is left, makes
/// the mock drop its responder; the caller then sees
/// [`FrameworkError::ActorDropped`].
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    unexpected: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let unexpected = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let unexpected_clone = unexpected.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                // The next expectation is consumed only by a request of its kind
                let expectation = {
                    let mut queue = expectations_clone.lock().unwrap();
                    let kind_matches = queue
                        .front()
                        .is_some_and(|next| next.kind() == request_kind(&request));
                    if kind_matches {
                        queue.pop_front()
                    } else {
                        None
                    }
                };

                match (request, expectation) {
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (ResourceRequest::Put { respond_to, .. }, Some(Expectation::Put(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (ResourceRequest::Get { respond_to, .. }, Some(Expectation::Get(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (ResourceRequest::GetMany { respond_to, .. }, Some(Expectation::GetMany(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (ResourceRequest::List { respond_to, .. }, Some(Expectation::List(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (ResourceRequest::Update { respond_to, .. }, Some(Expectation::Update(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (request, _) => {
                        unexpected_clone
                            .lock()
                            .unwrap()
                            .push(request_kind(&request).to_string());
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            unexpected,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Verifies that all expectations were met and no unexpected request arrived.
    pub fn verify(&self) {
        let unexpected = self.unexpected.lock().unwrap();
        if !unexpected.is_empty() {
            panic!("Unexpected requests: {:?}", *unexpected);
        }
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

fn request_kind<T: ActorEntity>(request: &ResourceRequest<T>) -> &'static str {
    match request {
        ResourceRequest::Create { .. } => "Create",
        ResourceRequest::Put { .. } => "Put",
        ResourceRequest::Get { .. } => "Get",
        ResourceRequest::GetMany { .. } => "GetMany",
        ResourceRequest::List { .. } => "List",
        ResourceRequest::Update { .. } => "Update",
    }
}

/// Generates `expect_<kind>()` on `MockClient` and its builder type.
macro_rules! expectation_builder {
    ($variant:ident, $snake:ident, $ok:ty) => {
        paste::paste! {
            #[doc = "Builder for `" $snake "` expectations."]
            pub struct [<$variant ExpectationBuilder>]<T: ActorEntity> {
                expectations: Expectations<T>,
            }

            impl<T: ActorEntity> [<$variant ExpectationBuilder>]<T> {
                /// Answers the request with a successful result.
                pub fn return_ok(self, value: $ok) {
                    self.expectations
                        .lock()
                        .unwrap()
                        .push_back(Expectation::$variant(Ok(value)));
                }

                /// Answers the request with an error.
                pub fn return_err(self, error: FrameworkError) {
                    self.expectations
                        .lock()
                        .unwrap()
                        .push_back(Expectation::$variant(Err(error)));
                }
            }

            impl<T: ActorEntity> MockClient<T> {
                #[doc = "Expects a `" $snake "` request."]
                pub fn [<expect_ $snake>](&mut self) -> [<$variant ExpectationBuilder>]<T> {
                    [<$variant ExpectationBuilder>] {
                        expectations: self.expectations.clone(),
                    }
                }
            }
        }
    };
}

expectation_builder!(Create, create, T);
expectation_builder!(Put, put, T::Id);
expectation_builder!(Get, get, Option<T>);
expectation_builder!(GetMany, get_many, Vec<T>);
expectation_builder!(List, list, Vec<T>);
expectation_builder!(Update, update, T);

// =============================================================================
// RECEIVER HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the actor: it pulls requests off the receiver with the
/// helpers below, asserts on their contents and answers through the responder.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a GetMany request
pub async fn expect_get_many<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Vec<T::Id>, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::GetMany { ids, respond_to }) => Some((ids, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Put request
pub async fn expect_put<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T, Response<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Put { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}
