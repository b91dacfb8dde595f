use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use spendwise_core::errors::{DatabaseError, Error as CoreError};

#[derive(Debug)]
pub enum ApiError {
    Core(CoreError),
    Unauthorized(String),
    BadRequest(String),
    Internal(String),
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        ApiError::Core(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::Core(err) => match err {
                CoreError::Validation(inner) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "VALIDATION",
                    inner.to_string(),
                ),
                CoreError::ConstraintViolation(msg) => (StatusCode::CONFLICT, "CONFLICT", msg),
                CoreError::Database(DatabaseError::UniqueViolation(msg))
                | CoreError::Database(DatabaseError::ForeignKeyViolation(msg)) => {
                    (StatusCode::CONFLICT, "CONFLICT", msg)
                }
                CoreError::NotFound(msg) | CoreError::Database(DatabaseError::NotFound(msg)) => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", msg)
                }
                CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg),
                other => {
                    tracing::error!(error = %other, "internal error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL",
                        "Internal server error".to_string(),
                    )
                }
            },
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "code": code,
            "message": message,
        }));
        (status, body).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
