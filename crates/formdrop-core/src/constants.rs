//! Filesystem layout and fixed payloads.

/// Default storage root, relative to the working directory.
pub const DEFAULT_REQUESTS_DIR: &str = "requests";

/// Directory (under the storage root) holding real submissions.
pub const SUBMISSIONS_DIR: &str = "submissions";

/// Directory (under the storage root) for anything else saved through the generic save path.
pub const REQUEST_LOGS_DIR: &str = "request_logs";

/// Bulk download archive, written directly under the storage root.
pub const ARCHIVE_FILE_NAME: &str = "all_submissions.zip";

/// Every stored submission gets this extension regardless of its content.
pub const SUBMISSION_EXTENSION: &str = "json";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_SUBMISSION_SIZE_MB: usize = 10;

/// Example sighting payload stored by the dummy generator.
pub const DUMMY_SUBMISSION: &str = r#"{"sightings":[{"valid":true,"seen_by":"123456-123456-654321-654321","answers":[{"0":["1.0"],"1":["0"],"2":["0"],"3":["0"],"4":["0"],"5":["08/01/2016 00:00"],"6":["Bahia"],"7":["Caravelas"],"8":["• Não quero informar"],"9":["20 de nov. de 2020 14:20:22"]}]}]}"#;
