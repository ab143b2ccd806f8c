//! Route paths and fixed response texts

pub const ROOT_PATH: &str = "/";
pub const LIST_PATH: &str = "/list";
pub const DETAILS_PREFIX: &str = "/details";
pub const DELETE_PREFIX: &str = "/delete_submission";
pub const GENERATE_DUMMY_PATH: &str = "/generate_dummy";
pub const SUBMISSION_PATH: &str = "/submission";
pub const DOWNLOAD_ALL_PATH: &str = "/download_all";

pub const SUBMISSION_RECEIVED: &str = "Submission received";
pub const SUBMISSION_POST_ONLY: &str =
    "This endpoint is for submissions only - also ensure you are using a POST request";
