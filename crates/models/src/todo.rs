use chrono::Utc;
use sea_orm::{
    entity::prelude::*, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, Set,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "todo")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub task: String,
    /// 0 = open, 1 = done
    pub is_done: i16,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_task(task: &str) -> Result<(), errors::ModelError> {
    if task.trim().is_empty() {
        return Err(errors::ModelError::Validation("task must not be empty".into()));
    }
    Ok(())
}

pub fn validate_is_done(value: i16) -> Result<(), errors::ModelError> {
    if !matches!(value, 0 | 1) {
        return Err(errors::ModelError::Validation("isDone must be 0 or 1".into()));
    }
    Ok(())
}

pub async fn insert(
    db: &DatabaseConnection,
    task: &str,
    is_done: i16,
) -> Result<Model, errors::ModelError> {
    validate_task(task)?;
    validate_is_done(is_done)?;

    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        task: Set(task.to_string()),
        is_done: Set(is_done),
        created_at: Set(now),
        updated_at: Set(now),
        deleted_at: Set(None),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// All rows not soft-deleted, persistence-layer default order.
pub async fn find_all_active(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::DeletedAt.is_null())
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn find_active_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(id)
        .filter(Column::DeletedAt.is_null())
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Overlay `task`/`is_done` onto an existing row and persist the result.
/// `id` and `created_at` are left untouched; `updated_at` is refreshed.
pub async fn merge_save(
    db: &DatabaseConnection,
    existing: Model,
    task: &str,
    is_done: i16,
) -> Result<Model, errors::ModelError> {
    validate_task(task)?;
    validate_is_done(is_done)?;

    let mut am: ActiveModel = existing.into();
    am.task = Set(task.to_string());
    am.is_done = Set(is_done);
    am.updated_at = Set(Utc::now().into());
    am.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Returns `false` when no active row matched the id.
pub async fn soft_delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, errors::ModelError> {
    let Some(found) = find_active_by_id(db, id).await? else {
        return Ok(false);
    };
    let mut am: ActiveModel = found.into();
    am.deleted_at = Set(Some(Utc::now().into()));
    am.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_must_not_be_empty() {
        assert!(validate_task("buy milk").is_ok());
        assert!(validate_task("").is_err());
        assert!(validate_task("   ").is_err());
    }

    #[test]
    fn is_done_is_binary() {
        assert!(validate_is_done(0).is_ok());
        assert!(validate_is_done(1).is_ok());
        assert!(validate_is_done(2).is_err());
        assert!(validate_is_done(-1).is_err());
    }

    #[test]
    fn wire_shape_is_camel_case() {
        let now = Utc::now().into();
        let m = Model {
            id: Uuid::new_v4(),
            task: "buy milk".into(),
            is_done: 0,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        let v = serde_json::to_value(&m).unwrap();
        assert!(v.get("isDone").is_some());
        assert!(v.get("createdAt").is_some());
        assert!(v.get("deletedAt").is_some());
        assert!(v.get("is_done").is_none());
    }
}
