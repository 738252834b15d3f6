use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::errors::ServiceError;

/// Persistence capability for the todo entity. Absence is signalled with
/// `Option::None` rather than an error; translating that into NotFound is
/// the service's job.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    async fn insert(&self, task: &str, is_done: i16) -> Result<models::todo::Model, ServiceError>;
    async fn find_all(&self) -> Result<Vec<models::todo::Model>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<models::todo::Model>, ServiceError>;
    async fn merge_save(
        &self,
        existing: models::todo::Model,
        task: &str,
        is_done: i16,
    ) -> Result<models::todo::Model, ServiceError>;
    async fn soft_delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmTodoRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl TodoRepository for SeaOrmTodoRepository {
    async fn insert(&self, task: &str, is_done: i16) -> Result<models::todo::Model, ServiceError> {
        Ok(models::todo::insert(&self.db, task, is_done).await?)
    }

    async fn find_all(&self) -> Result<Vec<models::todo::Model>, ServiceError> {
        Ok(models::todo::find_all_active(&self.db).await?)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<models::todo::Model>, ServiceError> {
        Ok(models::todo::find_active_by_id(&self.db, id).await?)
    }

    async fn merge_save(
        &self,
        existing: models::todo::Model,
        task: &str,
        is_done: i16,
    ) -> Result<models::todo::Model, ServiceError> {
        Ok(models::todo::merge_save(&self.db, existing, task, is_done).await?)
    }

    async fn soft_delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        Ok(models::todo::soft_delete(&self.db, id).await?)
    }
}
