//! Submission intake

use crate::constants::{ROOT_PATH, SUBMISSION_POST_ONLY, SUBMISSION_RECEIVED};
use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
};
use bytes::Bytes;
use formdrop_core::constants::DUMMY_SUBMISSION;
use formdrop_core::{AppError, Subdirectory};
use std::sync::Arc;

/// Store the raw request body, whatever its content type.
#[tracing::instrument(skip(state, body), fields(operation = "receive_submission", size = body.len()))]
pub async fn receive_submission(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, HttpAppError> {
    let stored = state.storage.save(&body, Subdirectory::Submissions).await?;

    tracing::info!(
        identifier = %stored.identifier,
        path = %stored.path,
        size = body.len(),
        "Submission received"
    );

    Ok(SUBMISSION_RECEIVED)
}

pub async fn submission_method_not_allowed() -> HttpAppError {
    HttpAppError(AppError::MethodNotAllowed(SUBMISSION_POST_ONLY.to_string()))
}

#[tracing::instrument(skip(state), fields(operation = "generate_dummy"))]
pub async fn generate_dummy(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let stored = state
        .storage
        .save(DUMMY_SUBMISSION.as_bytes(), Subdirectory::Submissions)
        .await?;

    tracing::debug!(path = %stored.path, "Dummy submission generated");

    Ok(Redirect::to(ROOT_PATH))
}
