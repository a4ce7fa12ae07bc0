//! Application setup and initialization
//!
//! All initialization logic lives here rather than in main.rs so tests can
//! assemble the same router around a substituted storage backend.

pub mod routes;
pub mod server;
pub mod storage;

use crate::state::AppState;
use anyhow::Result;
use darkroom_core::Config;
use std::sync::Arc;

/// Initialize the application: storage, state, routes.
pub fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config.validate()?;

    let storage = storage::setup_storage(&config)?;
    let state = Arc::new(AppState::new(config, storage));
    let router = routes::setup_routes(&state.config, state.clone())?;

    Ok((state, router))
}
