use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::errors::{FieldError, JsonApiError};
use crate::routes::ServerState;
use service::errors::ServiceError;

/// Raw request body; both fields are required and validated explicitly
/// before the service layer is invoked. Create and update share the shape.
#[derive(Debug, Deserialize, Serialize)]
pub struct TodoInput {
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default, rename = "isDone")]
    pub is_done: Option<i16>,
}

/// Validated form of [`TodoInput`].
#[derive(Debug)]
pub struct ValidTodo {
    pub task: String,
    pub is_done: i16,
}

pub fn validate_todo_input(input: &TodoInput) -> Result<ValidTodo, Vec<FieldError>> {
    let mut errors = Vec::new();

    let task = match &input.task {
        Some(t) if !t.trim().is_empty() => Some(t.clone()),
        Some(_) => {
            errors.push(FieldError { field: "task", message: "task must not be empty".into() });
            None
        }
        None => {
            errors.push(FieldError { field: "task", message: "task is required".into() });
            None
        }
    };

    let is_done = match input.is_done {
        Some(v @ (0 | 1)) => Some(v),
        Some(_) => {
            errors.push(FieldError { field: "isDone", message: "isDone must be 0 or 1".into() });
            None
        }
        None => {
            errors.push(FieldError { field: "isDone", message: "isDone is required".into() });
            None
        }
    };

    match (task, is_done) {
        (Some(task), Some(is_done)) if errors.is_empty() => Ok(ValidTodo { task, is_done }),
        _ => Err(errors),
    }
}

/// A body the Json extractor could not deserialize (syntax or wrong-typed
/// fields) is an invalid body, so it gets the same 400 as a failed
/// field validation.
fn bad_body(rejection: JsonRejection) -> JsonApiError {
    JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(rejection.body_text()))
}

/// Validation stays 400 and NotFound stays 404; everything else is an
/// infrastructure failure and surfaces as 500.
fn map_service_error(e: ServiceError, failure_title: &'static str) -> JsonApiError {
    match e {
        ServiceError::Validation(_) => {
            JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.to_string()))
        }
        ServiceError::NotFound(_) => {
            JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(e.to_string()))
        }
        _ => {
            error!(err = %e, failure_title, "todo operation failed");
            JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, failure_title, Some(e.to_string()))
        }
    }
}

#[utoipa::path(
    post, path = "/api/v1/todos", tag = "todos",
    request_body = crate::openapi::CreateTodoDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::TodoDoc),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<TodoInput>, JsonRejection>,
) -> Result<(StatusCode, Json<models::todo::Model>), JsonApiError> {
    let Json(input) = payload.map_err(bad_body)?;
    let body = validate_todo_input(&input).map_err(JsonApiError::validation)?;
    let created = state
        .todos
        .create(&body.task, body.is_done)
        .await
        .map_err(|e| map_service_error(e, "Create Failed"))?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/api/v1/todos", tag = "todos",
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::TodoDoc]),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<models::todo::Model>>, JsonApiError> {
    let list = state
        .todos
        .find_all()
        .await
        .map_err(|e| map_service_error(e, "List Failed"))?;
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/api/v1/todos/{id}", tag = "todos",
    params(("id" = Uuid, Path, description = "Todo ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::TodoDoc),
        (status = 400, description = "Bad ID Format"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<models::todo::Model>, JsonApiError> {
    let found = state
        .todos
        .find_one_or_fail(id)
        .await
        .map_err(|e| map_service_error(e, "Get Failed"))?;
    Ok(Json(found))
}

#[utoipa::path(
    put, path = "/api/v1/todos/{id}", tag = "todos",
    params(("id" = Uuid, Path, description = "Todo ID")),
    request_body = crate::openapi::UpdateTodoDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::TodoDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<TodoInput>, JsonRejection>,
) -> Result<Json<models::todo::Model>, JsonApiError> {
    let Json(input) = payload.map_err(bad_body)?;
    let body = validate_todo_input(&input).map_err(JsonApiError::validation)?;
    let updated = state
        .todos
        .update(id, &body.task, body.is_done)
        .await
        .map_err(|e| map_service_error(e, "Update Failed"))?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/v1/todos/{id}", tag = "todos",
    params(("id" = Uuid, Path, description = "Todo ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Bad ID Format"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, JsonApiError> {
    state
        .todos
        .remove(id)
        .await
        .map_err(|e| map_service_error(e, "Delete Failed"))?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    fn input(task: Option<&str>, is_done: Option<i16>) -> TodoInput {
        TodoInput { task: task.map(String::from), is_done }
    }

    #[test]
    fn accepts_valid_body() {
        let v = validate_todo_input(&input(Some("buy milk"), Some(0))).unwrap();
        assert_eq!(v.task, "buy milk");
        assert_eq!(v.is_done, 0);
    }

    #[test]
    fn rejects_empty_task() {
        let errs = validate_todo_input(&input(Some(""), Some(0))).unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].field, "task");
    }

    #[test]
    fn rejects_whitespace_task() {
        let errs = validate_todo_input(&input(Some("   "), Some(1))).unwrap_err();
        assert_eq!(errs[0].field, "task");
    }

    #[test]
    fn rejects_out_of_range_is_done() {
        let errs = validate_todo_input(&input(Some("x"), Some(2))).unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].field, "isDone");
    }

    #[test]
    fn reports_both_missing_fields() {
        let errs = validate_todo_input(&input(None, None)).unwrap_err();
        assert_eq!(errs.len(), 2);
    }

    #[test]
    fn validation_error_maps_to_400() {
        let resp = map_service_error(
            ServiceError::Validation("isDone must be 0 or 1".into()),
            "Create Failed",
        )
        .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let resp =
            map_service_error(ServiceError::not_found("todo"), "Update Failed").into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn db_failure_maps_to_500() {
        let resp = map_service_error(
            ServiceError::Db("connection reset by peer".into()),
            "Create Failed",
        )
        .into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
