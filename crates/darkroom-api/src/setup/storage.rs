//! Object store construction.

use std::sync::Arc;

use anyhow::Result;
use darkroom_core::Config;
use darkroom_storage::{S3Storage, Storage};

/// Build the process-lifetime object store client from configuration.
pub fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    let storage = S3Storage::new(
        config.s3_bucket.clone(),
        config.s3_region.clone(),
        config.s3_endpoint.clone(),
        config.aws_access_key_id.clone(),
        config.aws_secret_access_key.clone(),
        config.s3_public_base_url.clone(),
    )
    .map_err(|e| anyhow::anyhow!("Failed to initialize object store client: {}", e))?;

    tracing::info!(
        bucket = %config.s3_bucket,
        endpoint = %config.s3_endpoint,
        region = %config.s3_region,
        "Object store client initialized"
    );

    Ok(Arc::new(storage))
}
