use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{
    body::Body,
    extract::State,
    http::{header, Response, StatusCode},
    response::IntoResponse,
};
use formdrop_core::constants::ARCHIVE_FILE_NAME;
use formdrop_core::AppError;
use formdrop_infra::create_submissions_archive;
use std::sync::Arc;
use tokio_util::io::ReaderStream;

/// Rebuild the submissions archive and stream it back as an attachment.
#[tracing::instrument(skip(state), fields(operation = "download_all"))]
pub async fn download_all(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let summary = create_submissions_archive(state.storage.clone()).await?;

    let file = tokio::fs::File::open(&summary.path).await.map_err(|e| {
        AppError::InternalWithSource {
            message: format!("Failed to open archive: {}", summary.path.display()),
            source: e.into(),
        }
    })?;

    let content_disposition = format!("attachment; filename=\"{}\"", ARCHIVE_FILE_NAME);

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/zip")
        .header(header::CONTENT_DISPOSITION, content_disposition.as_str())
        .body(Body::from_stream(ReaderStream::new(file)))
        .map_err(|e| AppError::Internal(format!("Failed to build response: {}", e)))?;

    Ok(response)
}
