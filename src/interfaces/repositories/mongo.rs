use async_trait::async_trait;
use chrono::Utc;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, to_bson, Bson, Document},
    Collection, Database,
};
use uuid::Uuid;

use crate::{
    entities::{admin::AdminCredential, resource::Resource},
    errors::AppError,
    repositories::{admin::AdminRepository, resource::ResourceRepository},
};

fn bson_id(id: &Uuid) -> Result<Bson, AppError> {
    to_bson(id).map_err(|e| AppError::InternalError(format!("BSON encoding error: {}", e)))
}

/// MongoDB-backed storage for one resource collection. The collection
/// name comes from the resource itself.
pub struct MongoResourceRepo<T: Resource> {
    collection: Collection<T>,
}

impl<T: Resource> MongoResourceRepo<T> {
    pub fn new(db: &Database) -> Self {
        MongoResourceRepo {
            collection: db.collection(T::NAME),
        }
    }

    fn id_filter(id: &Uuid) -> Result<Document, AppError> {
        Ok(doc! {"_id": bson_id(id)?})
    }
}

#[async_trait]
impl<T: Resource> ResourceRepository<T> for MongoResourceRepo<T> {
    async fn list(&self) -> Result<Vec<T>, AppError> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! {"createdAt": 1})
            .await?;

        cursor.try_collect().await.map_err(AppError::from)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<T>, AppError> {
        self.collection
            .find_one(Self::id_filter(id)?)
            .await
            .map_err(AppError::from)
    }

    async fn insert(&self, record: &T) -> Result<(), AppError> {
        self.collection.insert_one(record).await?;
        Ok(())
    }

    async fn replace(&self, id: &Uuid, record: &T) -> Result<bool, AppError> {
        let result = self
            .collection
            .replace_one(Self::id_filter(id)?, record)
            .await?;

        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, AppError> {
        let result = self.collection.delete_one(Self::id_filter(id)?).await?;

        Ok(result.deleted_count > 0)
    }
}

pub struct MongoAdminRepo {
    database: Database,
    collection: Collection<AdminCredential>,
}

impl MongoAdminRepo {
    pub fn new(db: &Database) -> Self {
        MongoAdminRepo {
            database: db.clone(),
            collection: db.collection("admins"),
        }
    }
}

#[async_trait]
impl AdminRepository for MongoAdminRepo {
    async fn check_connection(&self) -> Result<(), AppError> {
        self.database
            .run_command(doc! {"ping": 1})
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<AdminCredential>, AppError> {
        self.collection
            .find_one(doc! {"email": email})
            .await
            .map_err(AppError::from)
    }

    async fn insert(&self, admin: &AdminCredential) -> Result<(), AppError> {
        self.collection.insert_one(admin).await?;
        Ok(())
    }

    async fn update_password_hash(&self, id: &Uuid, password_hash: &str) -> Result<(), AppError> {
        let updated_at = to_bson(&Utc::now())
            .map_err(|e| AppError::InternalError(format!("BSON encoding error: {}", e)))?;

        let result = self
            .collection
            .update_one(
                doc! {"_id": bson_id(id)?},
                doc! {"$set": {"passwordHash": password_hash, "updatedAt": updated_at}},
            )
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound("Admin credential not found".into()));
        }

        Ok(())
    }
}
