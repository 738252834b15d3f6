use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

// Schema-only mirrors of the wire types; camelCase to match the entity's
// serde rename.
#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoDoc {
    pub id: Uuid,
    pub task: String,
    #[schema(minimum = 0, maximum = 1)]
    pub is_done: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoDoc {
    pub task: String,
    #[schema(minimum = 0, maximum = 1)]
    pub is_done: i16,
}

#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoDoc {
    pub task: String,
    #[schema(minimum = 0, maximum = 1)]
    pub is_done: i16,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::todos::list,
        crate::routes::todos::create,
        crate::routes::todos::get,
        crate::routes::todos::update,
        crate::routes::todos::remove,
    ),
    components(
        schemas(
            HealthResponse,
            TodoDoc,
            CreateTodoDoc,
            UpdateTodoDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "todos")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schemas_use_camel_case_properties() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let todo = &doc["components"]["schemas"]["TodoDoc"]["properties"];
        assert!(todo.get("isDone").is_some());
        assert!(todo.get("createdAt").is_some());
        assert!(todo.get("deletedAt").is_some());
        assert!(todo.get("is_done").is_none());

        let create = &doc["components"]["schemas"]["CreateTodoDoc"]["properties"];
        assert!(create.get("isDone").is_some());
        assert!(create.get("is_done").is_none());
    }
}
