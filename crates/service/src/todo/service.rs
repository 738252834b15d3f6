use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::todo::repository::TodoRepository;

/// Application service for the todo resource. The repository is an explicit
/// constructor argument; no ambient state beyond it.
pub struct TodoService<R: TodoRepository> {
    repo: Arc<R>,
}

impl<R: TodoRepository> TodoService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn create(&self, task: &str, is_done: i16) -> Result<models::todo::Model, ServiceError> {
        let created = self.repo.insert(task, is_done).await?;
        info!(id = %created.id, "created todo");
        Ok(created)
    }

    pub async fn find_all(&self) -> Result<Vec<models::todo::Model>, ServiceError> {
        self.repo.find_all().await
    }

    /// The single point where an absent row becomes a typed NotFound.
    pub async fn find_one_or_fail(&self, id: Uuid) -> Result<models::todo::Model, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("todo"))
    }

    /// Read-before-write: absence fails NotFound before anything is written.
    pub async fn update(
        &self,
        id: Uuid,
        task: &str,
        is_done: i16,
    ) -> Result<models::todo::Model, ServiceError> {
        let existing = self.find_one_or_fail(id).await?;
        let updated = self.repo.merge_save(existing, task, is_done).await?;
        info!(id = %updated.id, "updated todo");
        Ok(updated)
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), ServiceError> {
        self.find_one_or_fail(id).await?;
        self.repo.soft_delete(id).await?;
        info!(id = %id, "removed todo");
        Ok(())
    }
}
