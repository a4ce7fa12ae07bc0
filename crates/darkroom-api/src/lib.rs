//! Darkroom API Library
//!
//! HTTP handlers, upload orchestration, and application setup for the
//! portfolio backend.

// Module declarations
pub mod constants;
pub mod error;
pub mod handlers;
pub mod services;
pub mod setup;
pub mod state;
pub mod telemetry;
pub mod utils;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use state::AppState;
