//! In-memory repository used by service unit tests; no database required.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::todo::repository::TodoRepository;

#[derive(Default)]
pub struct InMemoryTodoRepository {
    rows: Mutex<Vec<models::todo::Model>>,
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn insert(&self, task: &str, is_done: i16) -> Result<models::todo::Model, ServiceError> {
        models::todo::validate_task(task)?;
        models::todo::validate_is_done(is_done)?;
        let now = Utc::now().into();
        let row = models::todo::Model {
            id: Uuid::new_v4(),
            task: task.to_string(),
            is_done,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        self.rows.lock().await.push(row.clone());
        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<models::todo::Model>, ServiceError> {
        Ok(self
            .rows
            .lock()
            .await
            .iter()
            .filter(|m| m.deleted_at.is_none())
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<models::todo::Model>, ServiceError> {
        Ok(self
            .rows
            .lock()
            .await
            .iter()
            .find(|m| m.id == id && m.deleted_at.is_none())
            .cloned())
    }

    async fn merge_save(
        &self,
        existing: models::todo::Model,
        task: &str,
        is_done: i16,
    ) -> Result<models::todo::Model, ServiceError> {
        models::todo::validate_task(task)?;
        models::todo::validate_is_done(is_done)?;
        let mut rows = self.rows.lock().await;
        let row = rows
            .iter_mut()
            .find(|m| m.id == existing.id && m.deleted_at.is_none())
            .ok_or_else(|| ServiceError::not_found("todo"))?;
        row.task = task.to_string();
        row.is_done = is_done;
        row.updated_at = Utc::now().into();
        Ok(row.clone())
    }

    async fn soft_delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let mut rows = self.rows.lock().await;
        match rows.iter_mut().find(|m| m.id == id && m.deleted_at.is_none()) {
            Some(row) => {
                row.deleted_at = Some(Utc::now().into());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
