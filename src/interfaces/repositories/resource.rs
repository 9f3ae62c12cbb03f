use async_trait::async_trait;
use uuid::Uuid;

use crate::{entities::resource::Resource, errors::AppError};

/// Uniform storage contract for every registered resource. The backing
/// store supplies the only cross-request consistency there is: replace
/// is last-write-wins, there is no optimistic locking.
#[async_trait]
pub trait ResourceRepository<T: Resource>: Send + Sync {
    /// Full collection scan, ordered by creation time ascending.
    async fn list(&self) -> Result<Vec<T>, AppError>;

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<T>, AppError>;

    async fn insert(&self, record: &T) -> Result<(), AppError>;

    /// Returns false when no record with that id exists.
    async fn replace(&self, id: &Uuid, record: &T) -> Result<bool, AppError>;

    /// Permanent removal. Returns false when no record with that id exists.
    async fn delete(&self, id: &Uuid) -> Result<bool, AppError>;
}
