use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use service::errors::ServiceError;

/// Generic JSON error body with an HTTP status.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = json!({ "error": self.title, "detail": self.detail });
        (self.status, Json(body)).into_response()
    }
}

/// Maps service failures onto the HTTP surface. A database failure is 502
/// with an error body, which keeps it distinguishable from a legitimate
/// empty listing (200 with `[]`).
#[derive(Debug)]
pub struct ApiFailure(pub ServiceError);

impl From<ServiceError> for ApiFailure {
    fn from(e: ServiceError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        match self.0 {
            ServiceError::Invalid(errors) => {
                let fields: serde_json::Map<String, serde_json::Value> = errors
                    .iter()
                    .map(|e| (e.field.to_string(), json!(e.message)))
                    .collect();
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "error": "Validation Error", "errors": fields })),
                )
                    .into_response()
            }
            ServiceError::NotFound(msg) => {
                JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(msg)).into_response()
            }
            ServiceError::Validation(msg) => {
                JsonApiError::new(StatusCode::BAD_REQUEST, "Bad Request", Some(msg)).into_response()
            }
            ServiceError::Db(msg) => {
                error!(error = %msg, "database operation failed");
                JsonApiError::new(StatusCode::BAD_GATEWAY, "Database Error", Some(msg))
                    .into_response()
            }
            ServiceError::Model(e) => {
                JsonApiError::new(StatusCode::BAD_REQUEST, "Bad Request", Some(e.to_string()))
                    .into_response()
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use service::errors::FieldError;

    #[test]
    fn invalid_maps_to_422() {
        let failure = ApiFailure(ServiceError::Invalid(vec![FieldError {
            field: "name",
            message: "Name must be at least 2 characters",
        }]));
        let resp = failure.into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn not_found_maps_to_404_and_db_to_502() {
        let resp = ApiFailure(ServiceError::not_found("service")).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let resp = ApiFailure(ServiceError::Db("down".into())).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }
}
