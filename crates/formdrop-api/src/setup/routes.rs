//! Route configuration and setup

use crate::constants::{
    DELETE_PREFIX, DETAILS_PREFIX, DOWNLOAD_ALL_PATH, GENERATE_DUMMY_PATH, LIST_PATH, ROOT_PATH,
    SUBMISSION_PATH,
};
use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::{DefaultBodyLimit, Request},
    routing::{get, post},
    Router,
};
use formdrop_core::Config;
use formdrop_infra::{
    get_request_id, request_id_middleware, security_headers_middleware, SecurityHeadersConfig,
};
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// `prefix` followed by a catch-all `path` parameter.
fn wildcard_route(prefix: &str) -> String {
    format!("{}/{{*path}}", prefix)
}

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Router {
    let security_headers = Arc::new(SecurityHeadersConfig::new(config.is_production()));

    tracing::info!(
        max_submission_size_bytes = config.max_submission_size_bytes,
        hsts = security_headers.hsts,
        "Routes configured"
    );

    Router::new()
        .route(ROOT_PATH, get(handlers::list_submissions))
        .route(LIST_PATH, get(handlers::list_submissions))
        .route(&wildcard_route(DETAILS_PREFIX), get(handlers::submission_details))
        .route(
            &wildcard_route(DELETE_PREFIX),
            get(handlers::delete_submission).post(handlers::delete_submission),
        )
        .route(GENERATE_DUMMY_PATH, post(handlers::generate_dummy))
        .route(
            SUBMISSION_PATH,
            post(handlers::receive_submission).get(handlers::submission_method_not_allowed),
        )
        .route(DOWNLOAD_ALL_PATH, get(handlers::download_all))
        .layer(RequestBodyLimitLayer::new(config.max_submission_size_bytes))
        .layer(DefaultBodyLimit::disable())
        .layer(axum::middleware::from_fn_with_state(
            security_headers,
            security_headers_middleware,
        ))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %get_request_id(request).unwrap_or_default(),
                )
            }),
        )
        .layer(axum::middleware::from_fn(request_id_middleware))
        .with_state(state)
}
