//! # Mock Client
//!
//! `MockClient<T>` hands out a real [`ResourceClient<T>`] whose requests are
//! answered from a queue of scripted expectations instead of a running actor.
//! Use it to test logic *around* a client (error mapping, HTTP handlers)
//! without spawning the actor, and to inject failures such as
//! [`FrameworkError::ActorClosed`] that a live actor never produces.
//!
//! | | MockClient | Real Actor |
//! |---|---|---|
//! | **State** | None (scripted replies) | Real ordered store |
//! | **Error injection** | `return_err(..)` | Requires specific state |
//! | **Use case** | Client or handler logic | The actor or the whole system |
//!
//! Expectations are consumed in FIFO order. A request that does not match the
//! next expectation's kind is answered with `FrameworkError::ActorDropped`
//! and recorded, so [`MockClient::verify`] fails the test afterwards.
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, PartialEq)] struct Item { id: i64 }
//! #[derive(Debug)] struct ItemCreate;
//! #[derive(Debug)] struct ItemUpdate;
//! #[derive(Debug, thiserror::Error)] #[error("item error")] struct ItemError;
//!
//! #[async_trait]
//! impl ActorEntity for Item {
//!     type Id = i64; type Create = ItemCreate; type Update = ItemUpdate;
//!     type Context = (); type Error = ItemError;
//!     fn id(&self) -> i64 { self.id }
//!     fn from_create_params(id: i64, _: ItemCreate) -> Result<Self, ItemError> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: ItemUpdate, _: &()) -> Result<(), ItemError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockClient::<Item>::new();
//!     mock.expect_get(7).return_ok(Some(Item { id: 7 }));
//!     mock.expect_list().return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.get(7).await.unwrap(), Some(Item { id: 7 }));
//!     assert!(client.list().await.is_err());
//!
//!     mock.verify();
//! }
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::mpsc;

/// A scripted reply for one request.
enum Expectation<T: ActorEntity> {
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
}

struct MockState<T: ActorEntity> {
    expectations: VecDeque<Expectation<T>>,
    mismatches: Vec<String>,
}

type SharedState<T> = Arc<Mutex<MockState<T>>>;

fn lock<T: ActorEntity>(state: &SharedState<T>) -> MutexGuard<'_, MockState<T>> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Sends the scripted reply, or describes why the request did not match.
fn answer<T: ActorEntity>(
    request: ResourceRequest<T>,
    expectation: Option<Expectation<T>>,
) -> Option<String> {
    match (request, expectation) {
        (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
            let _ = respond_to.send(response);
            None
        }
        (
            ResourceRequest::Get { id, respond_to },
            Some(Expectation::Get {
                id: expected,
                response,
            }),
        ) => {
            let _ = respond_to.send(response);
            (id != expected).then(|| format!("get: expected id {expected}, got {id}"))
        }
        (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
            let _ = respond_to.send(response);
            None
        }
        (
            ResourceRequest::Update { id, respond_to, .. },
            Some(Expectation::Update {
                id: expected,
                response,
            }),
        ) => {
            let _ = respond_to.send(response);
            (id != expected).then(|| format!("update: expected id {expected}, got {id}"))
        }
        (
            ResourceRequest::Delete { id, respond_to },
            Some(Expectation::Delete {
                id: expected,
                response,
            }),
        ) => {
            let _ = respond_to.send(response);
            (id != expected).then(|| format!("delete: expected id {expected}, got {id}"))
        }
        // Dropping the responder surfaces as ActorDropped on the client side.
        (request, _) => Some(format!("unexpected {} request", request_kind(&request))),
    }
}

fn request_kind<T: ActorEntity>(request: &ResourceRequest<T>) -> &'static str {
    match request {
        ResourceRequest::List { .. } => "list",
        ResourceRequest::Get { .. } => "get",
        ResourceRequest::Create { .. } => "create",
        ResourceRequest::Update { .. } => "update",
        ResourceRequest::Delete { .. } => "delete",
    }
}

/// A mock actor with expectation tracking for fluent testing.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    state: SharedState<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let state: SharedState<T> = Arc::new(Mutex::new(MockState {
            expectations: VecDeque::new(),
            mismatches: Vec::new(),
        }));
        let task_state = state.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&task_state).expectations.pop_front();
                if let Some(mismatch) = answer(request, expectation) {
                    lock(&task_state).mismatches.push(mismatch);
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            state,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn push(&self, expectation: Expectation<T>) {
        lock(&self.state).expectations.push_back(expectation);
    }

    /// Expects a `list` request.
    pub fn expect_list(&self) -> ExpectationBuilder<'_, T, Vec<T>> {
        ExpectationBuilder::new(self, |response| Expectation::List { response })
    }

    /// Expects a `get` request for `id`.
    pub fn expect_get(&self, id: T::Id) -> ExpectationBuilder<'_, T, Option<T>> {
        ExpectationBuilder::new(self, move |response| Expectation::Get { id, response })
    }

    /// Expects a `create` request.
    pub fn expect_create(&self) -> ExpectationBuilder<'_, T, T> {
        ExpectationBuilder::new(self, |response| Expectation::Create { response })
    }

    /// Expects an `update` request for `id`.
    pub fn expect_update(&self, id: T::Id) -> ExpectationBuilder<'_, T, T> {
        ExpectationBuilder::new(self, move |response| Expectation::Update { id, response })
    }

    /// Expects a `delete` request for `id`.
    pub fn expect_delete(&self, id: T::Id) -> ExpectationBuilder<'_, T, ()> {
        ExpectationBuilder::new(self, move |response| Expectation::Delete { id, response })
    }

    /// Panics if any expectation is left over or any request did not match.
    pub fn verify(&self) {
        let state = lock(&self.state);
        if !state.mismatches.is_empty() {
            panic!("Mock received mismatched requests: {:?}", state.mismatches);
        }
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }
}

/// Completes an expectation with the reply the mock should send.
pub struct ExpectationBuilder<'a, T: ActorEntity, R> {
    mock: &'a MockClient<T>,
    build: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + 'a>,
}

impl<'a, T: ActorEntity, R> ExpectationBuilder<'a, T, R> {
    fn new(
        mock: &'a MockClient<T>,
        build: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + 'a,
    ) -> Self {
        Self {
            mock,
            build: Box::new(build),
        }
    }

    /// Reply with a successful result.
    pub fn return_ok(self, value: R) {
        self.mock.push((self.build)(Ok(value)));
    }

    /// Reply with an error.
    pub fn return_err(self, error: FrameworkError) {
        self.mock.push((self.build)(Err(error)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Account {
        id: i64,
        owner: String,
    }

    #[derive(Debug)]
    struct AccountCreate {
        owner: String,
    }

    #[derive(Debug)]
    struct AccountUpdate;

    #[derive(Debug, thiserror::Error)]
    #[error("Account error")]
    struct AccountError;

    #[async_trait]
    impl ActorEntity for Account {
        type Id = i64;
        type Create = AccountCreate;
        type Update = AccountUpdate;
        type Context = ();
        type Error = AccountError;

        fn id(&self) -> i64 {
            self.id
        }

        fn from_create_params(id: i64, params: AccountCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                owner: params.owner,
            })
        }

        async fn on_update(
            &mut self,
            _update: AccountUpdate,
            _ctx: &Self::Context,
        ) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn account(id: i64, owner: &str) -> Account {
        Account {
            id,
            owner: owner.to_string(),
        }
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mock = MockClient::<Account>::new();
        mock.expect_create().return_ok(account(1, "alice"));
        mock.expect_get(1).return_ok(Some(account(1, "alice")));
        mock.expect_list().return_ok(vec![account(1, "alice")]);
        mock.expect_delete(1).return_ok(());

        let client = mock.client();
        let created = client
            .create(AccountCreate {
                owner: "alice".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 1);

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched.unwrap().owner, "alice");

        assert_eq!(client.list().await.unwrap().len(), 1);
        client.delete(1).await.unwrap();

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_client_injects_errors() {
        let mock = MockClient::<Account>::new();
        mock.expect_update(4)
            .return_err(FrameworkError::NotFound("4".to_string()));

        let result = mock.client().update(4, AccountUpdate).await;
        assert!(matches!(result, Err(FrameworkError::NotFound(id)) if id == "4"));

        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "mismatched requests")]
    async fn test_mock_client_flags_unexpected_request() {
        let mock = MockClient::<Account>::new();
        mock.expect_list().return_ok(Vec::new());

        let result = mock.client().get(9).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));

        mock.verify();
    }
}
