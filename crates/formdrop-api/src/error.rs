//! HTTP error response conversion
//!
//! **Handler pattern:** return `Result<impl IntoResponse, HttpAppError>` and let
//! `?` convert `AppError`, `StorageError` or `anyhow::Error`. Every error renders
//! as a plain-text body with the status from `ErrorMetadata`.
//!
//! Read and delete failures keep their specific messages through
//! [`read_error`] and [`delete_error`]; anything else from storage becomes a
//! generic internal error.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use formdrop_core::{AppError, ErrorMetadata, LogLevel};
use formdrop_storage::StorageError;

/// Wrapper type for AppError to implement IntoResponse
/// (orphan rule: AppError lives in formdrop-core, IntoResponse in axum)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        HttpAppError(AppError::from(err))
    }
}

impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        if matches!(err, StorageError::OutsideRoot { .. }) {
            HttpAppError(AppError::Forbidden(err.to_string()))
        } else {
            HttpAppError(AppError::Internal(err.to_string()))
        }
    }
}

/// Map a storage failure during a detail read.
pub fn read_error(err: StorageError) -> AppError {
    if matches!(err, StorageError::OutsideRoot { .. }) {
        AppError::Forbidden(err.to_string())
    } else {
        AppError::ReadFailed(err.to_string())
    }
}

/// Map a storage failure during a delete.
pub fn delete_error(err: StorageError) -> AppError {
    if matches!(err, StorageError::OutsideRoot { .. }) {
        AppError::Forbidden(err.to_string())
    } else {
        AppError::DeleteFailed(err.to_string())
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    let error_code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type, error_code, "Error occurred");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type, error_code, "Error occurred");
        }
        LogLevel::Error => {
            tracing::error!(error = ?error, error_type, error_code, "Error occurred");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        (status, app_error.client_message()).into_response()
    }
}
