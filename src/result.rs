use std::fmt::Display;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use sqlx::error::ErrorKind;

#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub type Result<T = (), E = AppError> = anyhow::Result<T, E>;

/// Failures caused by the request rather than the server.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("missing required parameter `{0}`")]
    MissingParameter(&'static str),

    #[error("invalid value for parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        return match self {
            ApiError::MissingParameter(_) | ApiError::InvalidParameter { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::ConstraintViolation(_) => StatusCode::CONFLICT,
        };
    }

    pub fn code(&self) -> &'static str {
        return match self {
            ApiError::MissingParameter(_) => "MISSING_PARAMETER",
            ApiError::InvalidParameter { .. } => "INVALID_PARAMETER",
            ApiError::ConstraintViolation(_) => "CONSTRAINT_VIOLATION",
        };
    }

    /// Maps constraint failures reported by the store on insert to
    /// `ConstraintViolation`; any other database error stays a server error.
    pub fn from_insert(err: sqlx::Error) -> AppError {
        if let sqlx::Error::Database(db_err) = &err {
            if !matches!(db_err.kind(), ErrorKind::Other) {
                return ApiError::ConstraintViolation(db_err.message().to_string()).into();
            }
        }

        return err.into();
    }
}

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(api_err) = self.0.downcast_ref::<ApiError>() {
            tracing::warn!(code = api_err.code(), "{api_err}");

            let body = ErrorBody {
                code: api_err.code(),
                message: api_err.to_string(),
            };
            return (api_err.status(), Json(body)).into_response();
        }

        tracing::error!("{:?}", self.0);

        let body = ErrorBody {
            code: "INTERNAL_ERROR",
            message: format!("Something went wrong: {}", self.0),
        };
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
