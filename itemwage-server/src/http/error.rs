//! API error types with IntoResponse
//!
//! Every error body carries a single `detail` key: an array of field
//! errors for 422, a message string otherwise.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::{ValidationError, ValidationErrors};

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request shape or value rejected (422)
    Validation(ValidationErrors),

    /// Referenced record absent (404)
    NotFound { resource: &'static str, id: String },

    /// No route matches the path (404)
    RouteNotFound,

    /// Database error (500, logged)
    Database(DbError),

    /// Internal error (500, logged)
    Internal { message: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "detail": e.details() }),
            ),
            Self::NotFound { resource, id } => {
                tracing::debug!(resource = *resource, id = %id, "Record not found");
                (
                    StatusCode::NOT_FOUND,
                    json!({ "detail": format!("{} not found", resource) }),
                )
            }
            Self::RouteNotFound => (StatusCode::NOT_FOUND, json!({ "detail": "Not Found" })),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                internal_error()
            }
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                internal_error()
            }
        };

        (status, Json(body)).into_response()
    }
}

fn internal_error() -> (StatusCode, serde_json::Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "detail": "Internal Server Error" }),
    )
}

impl From<ValidationErrors> for ApiError {
    fn from(e: ValidationErrors) -> Self {
        Self::Validation(e)
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e.into())
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_422_with_detail_array() {
        let err = ApiError::from(ValidationError::Missing {
            field: "years_of_experience",
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["detail"][0]["type"], "missing");
        assert_eq!(body["detail"][0]["loc"][1], "years_of_experience");
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let err = ApiError::from(DbError::NotFound {
            resource: "Item",
            id: "999".into(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "detail": "Item not found" })
        );
    }

    #[tokio::test]
    async fn database_error_hides_cause() {
        let err = ApiError::from(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "detail": "Internal Server Error" })
        );
    }
}
