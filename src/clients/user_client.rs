//! # User Client
//!
//! Provides a high‑level API for the user directory.
use crate::clients::DirectoryClient;
use crate::error::DirectoryError;
use crate::framework::StoreClient;
use crate::model::{User, UserAction, UserCreate, UserId};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: StoreClient<User>,
}

impl UserClient {
    pub fn new(inner: StoreClient<User>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<UserId, DirectoryError> {
        debug!("Sending request");
        Ok(self.inner.create(params).await?)
    }

    /// Mention resolution does not look at this flag.
    #[instrument(skip(self))]
    pub async fn set_active(&self, id: UserId, is_active: bool) -> Result<(), DirectoryError> {
        debug!("Sending request");
        Ok(self
            .inner
            .perform_action(id, UserAction::SetActive(is_active))
            .await?)
    }
}

#[async_trait]
impl DirectoryClient<User> for UserClient {
    fn inner(&self) -> &StoreClient<User> {
        &self.inner
    }
}
