use crate::error::DirectoryError;
use crate::framework::{Record, StoreClient};
use async_trait::async_trait;

/// Trait for directory clients to inherit the standard read operations.
///
/// Implementors only supply [`DirectoryClient::inner`]; `get` and `get_many`
/// come for free with framework errors mapped into [`DirectoryError`].
#[async_trait]
pub trait DirectoryClient<T: Record>: Send + Sync {
    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<T>;

    /// Fetch a record by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, DirectoryError> {
        tracing::debug!("Sending request");
        Ok(self.inner().get(id).await?)
    }

    /// Fetch every record named in `ids` that exists, in request order.
    #[tracing::instrument(skip(self, ids), fields(count = ids.len()))]
    async fn get_many(&self, ids: Vec<T::Id>) -> Result<Vec<T>, DirectoryError> {
        tracing::debug!("Sending request");
        Ok(self.inner().get_many(ids).await?)
    }
}
