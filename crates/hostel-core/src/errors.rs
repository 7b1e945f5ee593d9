//! Application error type.
//!
//! Every failure leaving a handler is an [`AppError`], rendered as
//!
//! ```json
//! { "error": { "kind": "not_found", "detail": "Student not found" } }
//! ```

use anyhow::{Error, anyhow};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use sqlx::error::ErrorKind as DbErrorKind;
use utoipa::ToSchema;

/// Machine-readable error category carried in the `kind` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    InvalidCredentials,
    ValidationError,
    ConstraintViolation,
    UnknownRoute,
    MethodNotAllowed,
    Internal,
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub kind: ErrorKind,
    pub error: Error,
}

/// Body of an error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub kind: ErrorKind,
    pub detail: String,
}

impl AppError {
    pub fn new<E>(status: StatusCode, kind: ErrorKind, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            kind,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, ErrorKind::Internal, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, ErrorKind::NotFound, err)
    }

    pub fn unauthorized<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNAUTHORIZED, ErrorKind::InvalidCredentials, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, ErrorKind::ValidationError, err)
    }

    pub fn conflict<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::CONFLICT, ErrorKind::ConstraintViolation, err)
    }

    pub fn unknown_route() -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            ErrorKind::UnknownRoute,
            anyhow!("Resource not found"),
        )
    }

    pub fn method_not_allowed() -> Self {
        Self::new(
            StatusCode::METHOD_NOT_ALLOWED,
            ErrorKind::MethodNotAllowed,
            anyhow!("Method not allowed"),
        )
    }

    /// Classifies a store error by its constraint class.
    ///
    /// Unique violations become `409`, foreign key / check / not-null
    /// violations become `400`; anything else is an internal error.
    pub fn database(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let constraint = db_err.constraint().unwrap_or("unknown").to_string();
            match db_err.kind() {
                DbErrorKind::UniqueViolation => {
                    return Self::conflict(anyhow!(
                        "Duplicate value violates unique constraint {}",
                        constraint
                    ));
                }
                DbErrorKind::ForeignKeyViolation => {
                    return Self::new(
                        StatusCode::BAD_REQUEST,
                        ErrorKind::ConstraintViolation,
                        anyhow!("Referenced record does not exist ({})", constraint),
                    );
                }
                DbErrorKind::CheckViolation | DbErrorKind::NotNullViolation => {
                    return Self::new(
                        StatusCode::BAD_REQUEST,
                        ErrorKind::ConstraintViolation,
                        anyhow!("Value violates constraint {}", constraint),
                    );
                }
                _ => {}
            }
        }
        Self::internal(err)
    }

    /// Text placed in the `detail` field. Internal causes stay in the logs.
    pub fn detail(&self) -> String {
        match self.kind {
            ErrorKind::Internal => "Internal server error".to_string(),
            _ => self.error.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.kind == ErrorKind::Internal {
            tracing::error!(error = ?self.error, "Unhandled internal error");
        }

        let body = Json(ErrorResponse {
            error: ErrorBody {
                kind: self.kind,
                detail: self.detail(),
            },
        });

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_envelope() {
        let (status, body) = body_json(AppError::not_found(anyhow!("Student not found"))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["kind"], "not_found");
        assert_eq!(body["error"]["detail"], "Student not found");
    }

    #[tokio::test]
    async fn test_internal_error_hides_cause() {
        let (status, body) = body_json(AppError::internal(anyhow!("connection reset"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["kind"], "internal");
        assert_eq!(body["error"]["detail"], "Internal server error");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, body) = body_json(AppError::unknown_route()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["kind"], "unknown_route");
        assert_eq!(body["error"]["detail"], "Resource not found");
    }

    #[tokio::test]
    async fn test_method_not_allowed() {
        let (status, body) = body_json(AppError::method_not_allowed()).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["error"]["kind"], "method_not_allowed");
    }

    #[test]
    fn test_non_database_sqlx_error_is_internal() {
        let error = AppError::database(sqlx::Error::RowNotFound);
        assert_eq!(error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.kind, ErrorKind::Internal);
    }

    #[test]
    fn test_blanket_from_is_internal() {
        let error: AppError = anyhow!("boom").into();
        assert_eq!(error.kind, ErrorKind::Internal);
    }
}
