//! Darkroom core library
//!
//! Shared configuration and error types for the darkroom services.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{AppError, LogLevel};
