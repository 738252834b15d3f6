use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// One invalid request field, surfaced before the service layer runs.
#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// JSON error body used by every non-2xx API response.
#[derive(Debug)]
pub struct JsonApiError {
    status: StatusCode,
    title: &'static str,
    detail: Option<String>,
    fields: Vec<FieldError>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail, fields: Vec::new() }
    }

    pub fn validation(fields: Vec<FieldError>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, title: "Validation Error", detail: None, fields }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let mut body = serde_json::json!({ "error": self.title });
        if let Some(detail) = self.detail {
            body["detail"] = serde_json::Value::String(detail);
        }
        if !self.fields.is_empty() {
            // Mirrors the familiar validation-pipe shape: a list of messages
            body["message"] = serde_json::to_value(&self.fields).unwrap_or_default();
        }
        (self.status, Json(body)).into_response()
    }
}
