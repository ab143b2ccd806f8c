//! Formdrop Storage Library
//!
//! This crate provides the `Storage` trait and its local filesystem
//! implementation.
//!
//! # Layout
//!
//! Everything lives under one storage root (default `requests/`):
//!
//! - `<root>/submissions/<YYYY>/<Month>/<YYYYMMDDHHMMSSffffff>.json`
//! - `<root>/request_logs/<YYYY>/<Month>/<YYYYMMDDHHMMSSffffff>.json`
//! - `<root>/all_submissions.zip`
//!
//! Callers address files with `/`-separated paths relative to the root, as
//! returned by [`Storage::list`]. Path resolution lives in the `keys` module.

pub mod factory;
pub(crate) mod keys;
pub mod local;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use local::LocalStorage;
pub use traits::{Storage, StorageError, StorageResult, StoredSubmission};
