//! Application setup and initialization
//!
//! Everything `main` needs before serving, kept out of the binary so tests can
//! build the same router against a temporary storage root.

pub mod routes;
pub mod server;
pub mod storage;

use crate::state::AppState;
use anyhow::{Context, Result};
use formdrop_core::Config;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config.validate().context("Configuration validation failed")?;

    formdrop_infra::init_telemetry(None)
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!(
        environment = %config.environment,
        requests_dir = %config.requests_dir().display(),
        "Configuration loaded and validated successfully"
    );

    let state = build_state(config).await?;
    let router = routes::setup_routes(&state.config, state.clone());

    Ok((state, router))
}

/// Storage and shared state, without installing a global subscriber.
pub async fn build_state(config: Config) -> Result<Arc<AppState>> {
    let storage = storage::setup_storage(&config).await?;
    Ok(AppState::new(config, storage))
}
