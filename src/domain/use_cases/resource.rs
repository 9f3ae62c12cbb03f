use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::entities::resource::Resource;
use crate::errors::AppError;
use crate::interfaces::repositories::resource::ResourceRepository;

/// CRUD behavior shared by every registered resource. Identical across
/// resource types: only the record's validation and patch rules differ,
/// and those live on the [`Resource`] impl.
pub struct ResourceService<T: Resource> {
    repo: Arc<dyn ResourceRepository<T>>,
}

impl<T: Resource> Clone for ResourceService<T> {
    fn clone(&self) -> Self {
        ResourceService {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<T: Resource> ResourceService<T> {
    pub fn new(repo: Arc<dyn ResourceRepository<T>>) -> Self {
        ResourceService { repo }
    }

    pub async fn list(&self) -> Result<Vec<T>, AppError> {
        self.repo.list().await
    }

    pub async fn create(&self, input: T::Create) -> Result<T, AppError> {
        input.validate()?;

        let record = T::from_create(input);
        self.repo.insert(&record).await?;

        Ok(record)
    }

    pub async fn update(&self, id: &Uuid, patch: T::Patch) -> Result<T, AppError> {
        let mut record = self.repo.find_by_id(id).await?
            .ok_or_else(|| AppError::NotFound("Item not found".into()))?;

        record.apply_patch(patch);

        // Last-write-wins: the record may have changed in between, the
        // later replace simply overwrites.
        if !self.repo.replace(id, &record).await? {
            return Err(AppError::NotFound("Item not found".into()));
        }

        Ok(record)
    }

    pub async fn delete(&self, id: &Uuid) -> Result<(), AppError> {
        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound("Item not found".into()));
        }

        Ok(())
    }
}
