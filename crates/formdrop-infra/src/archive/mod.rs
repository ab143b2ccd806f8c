//! Archive creation service
//!
//! This module bundles every stored submission into a single ZIP archive.

pub use service::{create_submissions_archive, ArchiveSummary};

mod service;
