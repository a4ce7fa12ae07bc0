//! Storage abstraction trait
//!
//! This module defines the `Storage` trait that all storage backends must
//! implement. The upload service works against `Arc<dyn Storage>` so tests
//! can substitute an in-memory backend without touching process state.

use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Authentication rejected: {0}")]
    Unauthenticated(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl StorageError {
    /// Whether a retry could plausibly succeed. Auth and key problems are
    /// permanent; everything else is treated as transient transport trouble.
    pub fn is_transient(&self) -> bool {
        matches!(self, StorageError::UploadFailed(_))
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// Backends are constructed once at startup and shared immutably across
/// requests; implementations must not keep per-request state.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Store an object under `key` with the given content type and return
    /// its publicly resolvable URL.
    async fn put(&self, key: &str, data: Vec<u8>, content_type: &str) -> StorageResult<String>;

    /// Public URL for an already-stored key.
    fn public_url(&self, key: &str) -> String;

    /// Backend identifier for logging.
    fn backend_name(&self) -> &'static str;
}
