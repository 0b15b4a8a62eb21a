//! HTTP error types with IntoResponse
//!
//! Errors become rendered HTML error pages with appropriate status codes.
//! Database detail is logged server-side and never reaches the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::DbError;
use crate::models::ValidationError;
use crate::render;

/// Application error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (422)
    Validation(ValidationError),

    /// Snippet missing or expired (404)
    NotFound,

    /// Database error (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(e) => {
                let status = StatusCode::UNPROCESSABLE_ENTITY;
                (status, render::error_page(status, &e.to_string())).into_response()
            }
            Self::NotFound => {
                let status = StatusCode::NOT_FOUND;
                (
                    status,
                    render::error_page(status, "The snippet you asked for doesn't exist or has expired."),
                )
                    .into_response()
            }
            Self::Database(e) => {
                // Log the actual error, render a generic page
                tracing::error!("Database error: {}", e);
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                (
                    status,
                    render::error_page(status, "Something went wrong on our side."),
                )
                    .into_response()
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { .. } => Self::NotFound,
            _ => Self::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn validation_error_is_422() {
        let err = ApiError::Validation(ValidationError::Empty { field: "title" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn database_error_is_500() {
        let err = ApiError::Database(DbError::Sqlx(sqlx::Error::PoolClosed));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn db_not_found_maps_to_404() {
        let db_err = DbError::NotFound {
            resource: "snippet",
            id: "9".into(),
        };
        assert!(matches!(ApiError::from(db_err), ApiError::NotFound));
    }

    #[test]
    fn other_db_errors_stay_generic() {
        let db_err = DbError::Sqlx(sqlx::Error::PoolClosed);
        assert!(matches!(ApiError::from(db_err), ApiError::Database(_)));
    }
}
