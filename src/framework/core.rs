//! # Core Store Framework
//!
//! This module defines the generic building blocks for the directory actors.
//!
//! ## Key Types
//!
//! - [`Record`]: The trait that all stored types must implement.
//! - [`StoreActor`]: The generic actor that owns the records.
//! - [`StoreClient`]: The generic client for communicating with a store actor.
//! - [`FrameworkError`]: Common errors (e.g., ActorClosed, NotFound).

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any record must implement to be managed by a [`StoreActor`].
///
/// # Architecture Note
/// The store loop is written once against this contract and reused for every
/// directory (users, teams). Associated types keep each store's payloads apart:
/// a `Team` store only accepts `TeamCreate` and `TeamAction` messages.
pub trait Record: Clone + Debug + Send + Sync + 'static {
    /// The unique identifier for this record.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Copy + Eq + Hash + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Enum representing record-specific operations (e.g., `AddMember`).
    type Action: Send + Sync + Debug;

    /// The result type returned by actions.
    type ActionResult: Send + Sync + Debug;

    /// The error type returned by creation and actions.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full record from the assigned ID and payload.
    fn from_create(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Handle a record-specific action.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the store framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Record error: {0}")]
    Record(Box<dyn std::error::Error + Send + Sync>),
}

/// Type alias for the one-shot response channel used by store actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Message type sent to a [`StoreActor`].
///
/// Reads come in two shapes: `Get` for a single record and `GetMany` for a
/// batch, so a caller resolving many references pays one round trip per store.
#[derive(Debug)]
pub enum StoreRequest<T: Record> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    /// Returns the records found, in request order. Missing ids are skipped.
    GetMany {
        ids: Vec<T::Id>,
        respond_to: Response<Vec<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

// =============================================================================
// 3. THE GENERIC STORE ACTOR
// =============================================================================

/// The generic actor that owns a collection of records.
///
/// Each store processes its messages *sequentially* in its own task, so the
/// `store` map needs no `Mutex`: the task has exclusive ownership.
pub struct StoreActor<T: Record> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: Record> StoreActor<T> {
    /// Creates the actor and a client connected to it. IDs start at 1.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        (actor, StoreClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        // "Team" instead of "mention_resolver::model::team::Team"
        let record_type = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown");
        info!(record_type, "Store started");

        while let Some(request) = self.receiver.recv().await {
            self.handle(request, record_type);
        }

        info!(record_type, size = self.store.len(), "Shutdown");
    }

    fn handle(&mut self, request: StoreRequest<T>, record_type: &str) {
        match request {
            StoreRequest::Create { params, respond_to } => {
                debug!(record_type, ?params, "Create");
                let id = T::Id::from(self.next_id);
                match T::from_create(id, params) {
                    Ok(record) => {
                        self.next_id += 1;
                        self.store.insert(id, record);
                        info!(record_type, %id, size = self.store.len(), "Created");
                        let _ = respond_to.send(Ok(id));
                    }
                    Err(e) => {
                        warn!(record_type, error = %e, "Create failed");
                        let _ = respond_to.send(Err(FrameworkError::Record(Box::new(e))));
                    }
                }
            }
            StoreRequest::Get { id, respond_to } => {
                let record = self.store.get(&id).cloned();
                debug!(record_type, %id, found = record.is_some(), "Get");
                let _ = respond_to.send(Ok(record));
            }
            StoreRequest::GetMany { ids, respond_to } => {
                let records: Vec<T> = ids
                    .iter()
                    .filter_map(|id| self.store.get(id).cloned())
                    .collect();
                debug!(record_type, requested = ids.len(), found = records.len(), "GetMany");
                let _ = respond_to.send(Ok(records));
            }
            StoreRequest::Action {
                id,
                action,
                respond_to,
            } => {
                debug!(record_type, %id, ?action, "Action");
                let Some(record) = self.store.get_mut(&id) else {
                    warn!(record_type, %id, "Not found");
                    let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    return;
                };
                let result = record
                    .handle_action(action)
                    .map_err(|e| FrameworkError::Record(Box::new(e)));
                match &result {
                    Ok(_) => debug!(record_type, %id, "Action ok"),
                    Err(e) => warn!(record_type, %id, error = %e, "Action failed"),
                }
                let _ = respond_to.send(result);
            }
        }
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a [`StoreActor`].
///
/// Holds only a sender, so cloning is cheap and clones can be shared across tasks.
pub struct StoreClient<T: Record> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

// Derive would require `T: Clone` on the impl; the sender is clonable regardless.
impl<T: Record> Clone for StoreClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Record> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, FrameworkError> {
        self.request(|respond_to| StoreRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| StoreRequest::Get { id, respond_to })
            .await
    }

    pub async fn get_many(&self, ids: Vec<T::Id>) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| StoreRequest::GetMany { ids, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| StoreRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> StoreRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
