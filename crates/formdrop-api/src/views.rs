//! HTML views for the listing and detail pages
//!
//! Templates live in `templates/` and are compiled in by askama, which escapes
//! every interpolated value. Links carry references percent-encoded segment by
//! segment so arbitrary file names survive the round trip through the
//! wildcard routes.

use askama::Template;
use formdrop_core::{AppError, SubmissionContent, SubmissionEntry};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::constants::{
    DELETE_PREFIX, DETAILS_PREFIX, DOWNLOAD_ALL_PATH, GENERATE_DUMMY_PATH, ROOT_PATH,
};

/// Unreserved characters stay literal; everything else in a segment is encoded.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

struct ListRow<'a> {
    name: &'a str,
    path: &'a str,
    details_href: String,
    delete_href: String,
}

#[derive(Template)]
#[template(path = "list.html")]
struct ListTemplate<'a> {
    rows: Vec<ListRow<'a>>,
    generate_dummy_href: &'static str,
    download_all_href: &'static str,
}

#[derive(Template)]
#[template(path = "details.html")]
struct DetailsTemplate<'a> {
    path: &'a str,
    body: &'a str,
    is_json: bool,
    list_href: &'static str,
    delete_href: String,
}

/// `prefix/<reference>` with each reference segment percent-encoded.
pub fn route_href(prefix: &str, reference: &str) -> String {
    let mut href = String::from(prefix);
    for segment in reference.split('/') {
        href.push('/');
        href.extend(utf8_percent_encode(segment, SEGMENT));
    }
    href
}

/// Render the listing page, one row per entry with detail and delete links.
pub fn render_list(entries: &[SubmissionEntry]) -> Result<String, AppError> {
    let rows = entries
        .iter()
        .map(|entry| ListRow {
            name: &entry.name,
            path: &entry.path,
            details_href: route_href(DETAILS_PREFIX, &entry.path),
            delete_href: route_href(DELETE_PREFIX, &entry.path),
        })
        .collect();

    ListTemplate {
        rows,
        generate_dummy_href: GENERATE_DUMMY_PATH,
        download_all_href: DOWNLOAD_ALL_PATH,
    }
    .render()
    .map_err(|e| AppError::Internal(format!("Failed to render listing: {}", e)))
}

/// Render one file, marked structured when it was pretty-printed JSON.
pub fn render_details(path: &str, content: &SubmissionContent) -> Result<String, AppError> {
    DetailsTemplate {
        path,
        body: &content.body,
        is_json: content.is_json,
        list_href: ROOT_PATH,
        delete_href: route_href(DELETE_PREFIX, path),
    }
    .render()
    .map_err(|e| AppError::Internal(format!("Failed to render details: {}", e)))
}
