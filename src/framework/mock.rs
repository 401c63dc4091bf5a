//! # Mock Store
//!
//! Utilities for testing clients in isolation.
//!
//! [`MockStore`] hands out a real [`StoreClient`] whose requests are answered from
//! a queue of expectations instead of a running [`StoreActor`](crate::framework::StoreActor).
//! Expectations are consumed in the order they were registered.

use crate::framework::{FrameworkError, Record, StoreClient, StoreRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::mpsc;

/// Represents an expected request to the mock store.
enum Expectation<T: Record> {
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    GetMany {
        response: Result<Vec<T>, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

struct MockState<T: Record> {
    expectations: VecDeque<Expectation<T>>,
    mismatches: Vec<String>,
}

type SharedState<T> = Arc<Mutex<MockState<T>>>;

fn lock<T: Record>(state: &SharedState<T>) -> MutexGuard<'_, MockState<T>> {
    // A panicking test thread must not hide the recorded expectations.
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// A mock store with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockStore::<Team>::new();
/// mock.expect_get_many().return_ok(vec![team]);
/// mock.expect_action(TeamId(1)).return_ok(TeamActionResult::Members(vec![UserId(2)]));
///
/// let client = TeamClient::new(mock.client());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
///
/// A request that does not match the next expectation is recorded, its reply
/// channel is dropped (the caller sees [`FrameworkError::ActorDropped`]), and
/// [`MockStore::verify`] panics with the recorded mismatch.
pub struct MockStore<T: Record> {
    client: StoreClient<T>,
    state: SharedState<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Record> MockStore<T> {
    /// Creates a new mock store with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let state: SharedState<T> = Arc::new(Mutex::new(MockState {
            expectations: VecDeque::new(),
            mismatches: Vec::new(),
        }));
        let task_state = state.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut state = lock(&task_state);
                let expectation = state.expectations.pop_front();

                match (request, expectation) {
                    (
                        StoreRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::GetMany { respond_to, .. },
                        Some(Expectation::GetMany { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action {
                            id: expected,
                            response,
                        }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        state
                            .mismatches
                            .push(format!("unexpected request: {:?}", request));
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            state,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    /// Expects a `create` request.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder::new(self.state.clone(), |response| Expectation::Create {
            response,
        })
    }

    /// Expects a `get` request for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.state.clone(), move |response| Expectation::Get {
            id,
            response,
        })
    }

    /// Expects a `get_many` request, whatever ids it carries.
    pub fn expect_get_many(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(self.state.clone(), |response| Expectation::GetMany {
            response,
        })
    }

    /// Expects an action on `id`.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        ExpectationBuilder::new(self.state.clone(), move |response| Expectation::Action {
            id,
            response,
        })
    }

    /// Verifies that all expectations were met and no unexpected request arrived.
    pub fn verify(&self) {
        let state = lock(&self.state);
        if !state.mismatches.is_empty() {
            panic!("Mock received unexpected requests: {:?}", state.mismatches);
        }
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }
}

impl<T: Record> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder that queues one expectation with its canned response.
pub struct ExpectationBuilder<T: Record, R> {
    state: SharedState<T>,
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: Record, R> ExpectationBuilder<T, R> {
    fn new(
        state: SharedState<T>,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            state,
            make: Box::new(make),
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.make)(response);
        lock(&self.state).expectations.push_back(expectation);
    }
}
