use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::{
    entities::{admin::AdminCredential, resource::Resource},
    errors::AppError,
    repositories::{admin::AdminRepository, resource::ResourceRepository},
};

/// In-process storage with the same last-write-wins semantics as the
/// document store. Backs the test suite and local development without a
/// running MongoDB.
pub struct MemoryResourceRepo<T: Resource> {
    records: DashMap<Uuid, T>,
}

impl<T: Resource> MemoryResourceRepo<T> {
    pub fn new() -> Self {
        MemoryResourceRepo {
            records: DashMap::new(),
        }
    }
}

impl<T: Resource> Default for MemoryResourceRepo<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Resource> ResourceRepository<T> for MemoryResourceRepo<T> {
    async fn list(&self) -> Result<Vec<T>, AppError> {
        let mut records: Vec<T> = self
            .records
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        records.sort_by_key(|r| (r.created_at(), r.id()));
        Ok(records)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<T>, AppError> {
        Ok(self.records.get(id).map(|entry| entry.value().clone()))
    }

    async fn insert(&self, record: &T) -> Result<(), AppError> {
        self.records.insert(record.id(), record.clone());
        Ok(())
    }

    async fn replace(&self, id: &Uuid, record: &T) -> Result<bool, AppError> {
        if !self.records.contains_key(id) {
            return Ok(false);
        }
        self.records.insert(*id, record.clone());
        Ok(true)
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, AppError> {
        Ok(self.records.remove(id).is_some())
    }
}

pub struct MemoryAdminRepo {
    admins: DashMap<Uuid, AdminCredential>,
}

impl MemoryAdminRepo {
    pub fn new() -> Self {
        MemoryAdminRepo {
            admins: DashMap::new(),
        }
    }
}

impl Default for MemoryAdminRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AdminRepository for MemoryAdminRepo {
    async fn check_connection(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<AdminCredential>, AppError> {
        Ok(self
            .admins
            .iter()
            .find(|entry| entry.value().email == email)
            .map(|entry| entry.value().clone()))
    }

    async fn insert(&self, admin: &AdminCredential) -> Result<(), AppError> {
        self.admins.insert(admin.id, admin.clone());
        Ok(())
    }

    async fn update_password_hash(&self, id: &Uuid, password_hash: &str) -> Result<(), AppError> {
        match self.admins.get_mut(id) {
            Some(mut entry) => {
                let admin = entry.value_mut();
                admin.password_hash = password_hash.to_string();
                admin.updated_at = chrono::Utc::now();
                Ok(())
            }
            None => Err(AppError::NotFound("Admin credential not found".into())),
        }
    }
}
