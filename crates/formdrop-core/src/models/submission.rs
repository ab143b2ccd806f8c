use std::fmt;

use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;

use crate::constants::{REQUEST_LOGS_DIR, SUBMISSIONS_DIR, SUBMISSION_EXTENSION};

/// Top-level directory under the storage root a payload is saved into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Subdirectory {
    Submissions,
    /// Anything saved through the generic save path without naming a directory.
    #[default]
    RequestLogs,
}

impl Subdirectory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Subdirectory::Submissions => SUBMISSIONS_DIR,
            Subdirectory::RequestLogs => REQUEST_LOGS_DIR,
        }
    }
}

impl fmt::Display for Subdirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier and partition of a submission, all derived from one instant.
///
/// The identifier is `YYYYMMDDHHMMSSffffff`; two saves within the same
/// microsecond get the same identifier and the later one wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionStamp {
    pub identifier: String,
    pub year: String,
    /// Full English month name, e.g. `October`.
    pub month: String,
}

impl SubmissionStamp {
    /// Stamp for the current local time.
    pub fn now() -> Self {
        Self::at(&Local::now())
    }

    pub fn at<Tz: TimeZone>(moment: &DateTime<Tz>) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self {
            identifier: moment.format("%Y%m%d%H%M%S%6f").to_string(),
            year: moment.format("%Y").to_string(),
            month: moment.format("%B").to_string(),
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}", self.identifier, SUBMISSION_EXTENSION)
    }
}

/// One listed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionEntry {
    /// File name shown in the listing.
    pub name: String,
    /// `/`-separated path relative to the storage root, accepted by read and delete.
    pub path: String,
}

/// File content prepared for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionContent {
    pub body: String,
    /// True when `body` is pretty-printed JSON, false when it is the raw text.
    pub is_json: bool,
}

impl SubmissionContent {
    /// Pretty-print `raw` with 4-space indentation if it parses as JSON,
    /// keeping object keys in stored order; otherwise keep it verbatim.
    pub fn from_raw(raw: String) -> Self {
        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(value) => match pretty_print(&value) {
                Ok(body) => Self {
                    body,
                    is_json: true,
                },
                Err(_) => Self::plain(raw),
            },
            Err(_) => Self::plain(raw),
        }
    }

    fn plain(raw: String) -> Self {
        Self {
            body: raw,
            is_json: false,
        }
    }
}

fn pretty_print(value: &serde_json::Value) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate};

    fn fixed_moment() -> DateTime<FixedOffset> {
        let naive = NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_micro_opt(9, 5, 2, 42)
            .unwrap();
        FixedOffset::east_opt(0)
            .unwrap()
            .from_local_datetime(&naive)
            .unwrap()
    }

    #[test]
    fn test_stamp_identifier_has_microsecond_precision() {
        let stamp = SubmissionStamp::at(&fixed_moment());
        assert_eq!(stamp.identifier, "20240307090502000042");
        assert_eq!(stamp.year, "2024");
        assert_eq!(stamp.month, "March");
        assert_eq!(stamp.file_name(), "20240307090502000042.json");
    }

    #[test]
    fn test_stamp_now_is_twenty_digits() {
        let stamp = SubmissionStamp::now();
        assert_eq!(stamp.identifier.len(), 20);
        assert!(stamp.identifier.chars().all(|c| c.is_ascii_digit()));
        assert!(stamp.identifier.starts_with(&stamp.year));
    }

    #[test]
    fn test_subdirectory_names() {
        assert_eq!(Subdirectory::Submissions.as_str(), "submissions");
        assert_eq!(Subdirectory::RequestLogs.to_string(), "request_logs");
        assert_eq!(Subdirectory::default(), Subdirectory::RequestLogs);
    }

    #[test]
    fn test_content_pretty_prints_json() {
        let content = SubmissionContent::from_raw(r#"{"a":1}"#.to_string());
        assert!(content.is_json);
        assert_eq!(content.body, "{\n    \"a\": 1\n}");
    }

    #[test]
    fn test_content_keeps_key_order() {
        let content = SubmissionContent::from_raw(r#"{"zeta":1,"alpha":[true,null]}"#.to_string());
        assert!(content.is_json);
        assert_eq!(
            content.body,
            "{\n    \"zeta\": 1,\n    \"alpha\": [\n        true,\n        null\n    ]\n}"
        );
    }

    #[test]
    fn test_content_keeps_wide_numbers_exact() {
        let content = SubmissionContent::from_raw(
            r#"{"id":123456789012345678901234567890,"ratio":0.10000000000000000555}"#.to_string(),
        );
        assert!(content.is_json);
        assert_eq!(
            content.body,
            "{\n    \"id\": 123456789012345678901234567890,\n    \"ratio\": 0.10000000000000000555\n}"
        );
    }

    #[test]
    fn test_content_reparses_to_same_value() {
        let raw = crate::constants::DUMMY_SUBMISSION.to_string();
        let content = SubmissionContent::from_raw(raw.clone());
        assert!(content.is_json);
        let original: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let reparsed: serde_json::Value = serde_json::from_str(&content.body).unwrap();
        assert_eq!(original, reparsed);
    }

    #[test]
    fn test_content_falls_back_to_raw_text() {
        let content = SubmissionContent::from_raw("hello".to_string());
        assert!(!content.is_json);
        assert_eq!(content.body, "hello");

        let content = SubmissionContent::from_raw("{\"a\":".to_string());
        assert!(!content.is_json);
        assert_eq!(content.body, "{\"a\":");
    }
}
