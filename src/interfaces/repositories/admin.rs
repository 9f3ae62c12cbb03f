use async_trait::async_trait;
use uuid::Uuid;

use crate::{entities::admin::AdminCredential, errors::AppError};

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn check_connection(&self) -> Result<(), AppError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<AdminCredential>, AppError>;

    async fn insert(&self, admin: &AdminCredential) -> Result<(), AppError>;

    async fn update_password_hash(&self, id: &Uuid, password_hash: &str) -> Result<(), AppError>;
}
