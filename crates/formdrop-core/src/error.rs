//! Error types module
//!
//! All route-level failures are unified under `AppError`. Each variant
//! self-describes its HTTP status, error code, client-facing message and log
//! level through `ErrorMetadata`; the api crate turns that into a response.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like refused deletes
    Debug,
    /// Warning level - for client mistakes worth noticing
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "READ_FAILED")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Unauthorized action: {0}")]
    Forbidden(String),

    #[error("Failed to read submission: {0}")]
    ReadFailed(String),

    #[error("Failed to delete submission: {0}")]
    DeleteFailed(String),

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: format!("{:#}", err),
            source: err,
        }
    }
}

/// Static metadata for each variant: (http_status, error_code, log_level).
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, LogLevel) {
    match err {
        AppError::Forbidden(_) => (403, "FORBIDDEN", LogLevel::Warn),
        AppError::ReadFailed(_) => (500, "READ_FAILED", LogLevel::Error),
        AppError::DeleteFailed(_) => (500, "DELETE_FAILED", LogLevel::Error),
        AppError::MethodNotAllowed(_) => (405, "METHOD_NOT_ALLOWED", LogLevel::Debug),
        AppError::Internal(_) => (500, "INTERNAL_ERROR", LogLevel::Error),
        AppError::InternalWithSource { .. } => (500, "INTERNAL_ERROR", LogLevel::Error),
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn client_message(&self) -> String {
        match self {
            AppError::Forbidden(_) => "Unauthorized action".to_string(),
            AppError::ReadFailed(e) => format!("An error occurred: {}", e),
            AppError::DeleteFailed(e) => {
                format!("An error occurred while deleting the file: {}", e)
            }
            AppError::MethodNotAllowed(msg) => msg.clone(),
            AppError::Internal(_) | AppError::InternalWithSource { .. } => {
                "Internal server error".to_string()
            }
        }
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).2
    }
}

impl AppError {
    /// Variant name, used as a structured logging field.
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Forbidden(_) => "Forbidden",
            AppError::ReadFailed(_) => "ReadFailed",
            AppError::DeleteFailed(_) => "DeleteFailed",
            AppError::MethodNotAllowed(_) => "MethodNotAllowed",
            AppError::Internal(_) => "Internal",
            AppError::InternalWithSource { .. } => "InternalWithSource",
        }
    }
}
