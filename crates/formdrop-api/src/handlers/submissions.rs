//! Browsing: listing, detail and delete

use crate::constants::ROOT_PATH;
use crate::error::{delete_error, read_error, HttpAppError};
use crate::state::AppState;
use crate::views;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect},
};
use formdrop_core::Subdirectory;
use std::sync::Arc;

#[tracing::instrument(skip(state), fields(operation = "list_submissions"))]
pub async fn list_submissions(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let entries = state.storage.list(Subdirectory::Submissions).await?;

    tracing::debug!(count = entries.len(), "Listing submissions");

    Ok(Html(views::render_list(&entries)?))
}

#[tracing::instrument(skip(state), fields(operation = "submission_details"))]
pub async fn submission_details(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let content = state.storage.read(&path).await.map_err(read_error)?;

    Ok(Html(views::render_details(&path, &content)?))
}

#[tracing::instrument(skip(state), fields(operation = "delete_submission"))]
pub async fn delete_submission(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    state.storage.delete(&path).await.map_err(delete_error)?;

    tracing::info!(path = %path, "Submission deleted");

    Ok(Redirect::to(ROOT_PATH))
}
