//! Formdrop Core Library
//!
//! This crate provides the submission models, error types and configuration
//! shared across all formdrop components.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{Subdirectory, SubmissionContent, SubmissionEntry, SubmissionStamp};
