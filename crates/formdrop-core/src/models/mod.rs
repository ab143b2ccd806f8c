//! Domain models

pub mod submission;

pub use submission::{Subdirectory, SubmissionContent, SubmissionEntry, SubmissionStamp};
