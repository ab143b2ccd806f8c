//! Formdrop Infrastructure Library
//!
//! This crate provides shared infrastructure components used by the formdrop server:
//! - Middleware (request ID, security headers)
//! - Telemetry initialization
//! - Archive creation

#[cfg(feature = "middleware")]
pub mod middleware;

#[cfg(feature = "observability-basic")]
pub mod telemetry;

#[cfg(feature = "archive")]
pub mod archive;

// Re-export commonly used types
#[cfg(feature = "middleware")]
pub use middleware::{
    get_request_id, request_id_middleware, security_headers_middleware, RequestId,
    SecurityHeadersConfig,
};

#[cfg(feature = "observability-basic")]
pub use telemetry::{init_telemetry, shutdown_telemetry};

#[cfg(feature = "archive")]
pub use archive::{create_submissions_archive, ArchiveSummary};
