//! Upload orchestration service
//!
//! Drives the per-file pipeline: declared-type validation → decode →
//! format cross-check → optional downscale → re-encode → key generation →
//! store put with bounded retry.
//!
//! Batch contract: files are processed sequentially in submission order and
//! every file gets its own outcome — a public URL or a typed error. A
//! failure never aborts the rest of the batch, and already-stored objects
//! are never rolled back; storage is not transactional across a batch.

use std::sync::Arc;

use darkroom_core::AppError;
use darkroom_processing::image::{decode, encode, fit_within};
use darkroom_processing::ImageValidator;
use darkroom_storage::{keys::unique_object_key, put_with_retry, RetryPolicy, Storage};
use serde::Serialize;

use crate::error::storage_error_to_app;
use crate::utils::upload::{RawFile, UploadRequest};

/// Outcome for a single file, in submission order.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Uploaded {
        file: String,
        url: String,
    },
    Failed {
        file: String,
        code: String,
        error: String,
    },
}

/// Upload orchestration service.
///
/// Holds the storage handle injected at construction time; tests pass an
/// in-memory backend.
pub struct UploadService {
    storage: Arc<dyn Storage>,
    retry: RetryPolicy,
}

impl UploadService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            retry: RetryPolicy::default(),
        }
    }

    /// Process a validated upload request, one outcome per file.
    pub async fn process(&self, request: UploadRequest) -> Vec<FileOutcome> {
        let mut outcomes = Vec::with_capacity(request.files.len());

        for file in request.files {
            let name = file.original_name.clone();
            match self
                .process_file(&request.folder, request.max_dimension, file)
                .await
            {
                Ok(url) => {
                    tracing::info!(file = %name, url = %url, "File uploaded");
                    outcomes.push(FileOutcome::Uploaded { file: name, url });
                }
                Err(err) => {
                    tracing::warn!(file = %name, error = %err.detailed_message(), "File rejected");
                    outcomes.push(FileOutcome::Failed {
                        file: name,
                        code: err.error_code().to_string(),
                        error: err.client_message(),
                    });
                }
            }
        }

        outcomes
    }

    async fn process_file(
        &self,
        folder: &str,
        max_dimension: Option<u32>,
        file: RawFile,
    ) -> Result<String, AppError> {
        let expected_kind = ImageValidator::validate(&file.declared_content_type)
            .map_err(|e| AppError::InvalidFileType(e.to_string()))?;

        let decoded = decode(&file.bytes).map_err(|e| AppError::Decode(e.to_string()))?;
        let kind = decoded.kind;

        // The sniffed format is authoritative; a mismatch means the header lied.
        if kind != expected_kind {
            return Err(AppError::InvalidFileType(format!(
                "declared {} but stream is {}",
                file.declared_content_type,
                kind.mime()
            )));
        }

        let raster = match max_dimension {
            Some(max) => fit_within(decoded.image, max),
            None => decoded.image,
        };

        let encoded = encode(&raster, kind).map_err(|e| AppError::Encode(e.to_string()))?;

        let key = unique_object_key(folder, &file.original_name, chrono::Utc::now().timestamp());

        let url = put_with_retry(
            self.storage.as_ref(),
            self.retry,
            &key,
            &encoded,
            kind.mime(),
        )
        .await
        .map_err(storage_error_to_app)?;

        Ok(url)
    }
}
