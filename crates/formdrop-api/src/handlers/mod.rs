//! HTTP handlers

pub mod download;
pub mod intake;
pub mod submissions;

pub use download::download_all;
pub use intake::{generate_dummy, receive_submission, submission_method_not_allowed};
pub use submissions::{delete_submission, list_submissions, submission_details};
