//! Boundary mapping from `AppError` to HTTP responses.
//!
//! `Rejected` never reaches this layer on the happy path (handlers absorb it
//! into a redirect); the mapping below is a backstop.

use std::fmt;

use actix_web::http::StatusCode;
use actix_web::ResponseError;
use postify_core::AppError;

#[derive(Debug)]
pub struct ApiError(pub AppError);

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            AppError::NotFound(..) => StatusCode::NOT_FOUND,
            AppError::Rejected(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Render failures and other infrastructure errors on the way out.
pub fn internal(err: impl Into<anyhow::Error>) -> ApiError {
    ApiError(AppError::Internal(err.into()))
}
