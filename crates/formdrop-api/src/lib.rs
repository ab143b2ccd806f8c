//! Formdrop API Library
//!
//! This crate provides the HTTP handlers, HTML views, and application setup.

pub mod constants;
pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod views;

pub use error::HttpAppError;
pub use state::AppState;
