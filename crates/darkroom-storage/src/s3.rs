use crate::traits::{Storage, StorageError, StorageResult};
use async_trait::async_trait;
use bytes::Bytes;
use object_store::aws::{AmazonS3, AmazonS3Builder};
use object_store::path::Path;
use object_store::Error as ObjectStoreError;
use object_store::{Attribute, Attributes, ObjectStore as _, ObjectStoreExt as _};
use object_store::{PutOptions, PutPayload};

/// S3-compatible storage implementation
///
/// Built once at startup from deployment configuration and shared across
/// all requests. Uses path-style addressing so non-AWS endpoints (R2,
/// MinIO, Spaces) work without wildcard DNS.
#[derive(Clone)]
pub struct S3Storage {
    store: AmazonS3,
    bucket: String,
    public_base_url: String,
}

impl S3Storage {
    /// Create a new S3Storage instance
    ///
    /// # Arguments
    /// * `bucket` - bucket name
    /// * `region` - region identifier; S3-compatible providers commonly use `"auto"`
    /// * `endpoint` - endpoint URL (e.g. "http://localhost:9000" for MinIO)
    /// * `access_key_id` / `secret_access_key` - static long-lived credentials
    /// * `public_base_url` - base URL public object links are built from
    pub fn new(
        bucket: String,
        region: String,
        endpoint: String,
        access_key_id: String,
        secret_access_key: String,
        public_base_url: String,
    ) -> StorageResult<Self> {
        let allow_http = endpoint.starts_with("http://");

        let store = AmazonS3Builder::new()
            .with_region(region)
            .with_bucket_name(bucket.clone())
            .with_endpoint(endpoint)
            .with_allow_http(allow_http)
            .with_access_key_id(access_key_id)
            .with_secret_access_key(secret_access_key)
            .with_virtual_hosted_style_request(false)
            .build()
            .map_err(|e| StorageError::ConfigError(e.to_string()))?;

        Ok(S3Storage {
            store,
            bucket,
            public_base_url,
        })
    }
}

fn map_store_error(err: ObjectStoreError) -> StorageError {
    match err {
        e @ ObjectStoreError::Unauthenticated { .. } => StorageError::Unauthenticated(e.to_string()),
        e @ ObjectStoreError::PermissionDenied { .. } => {
            StorageError::PermissionDenied(e.to_string())
        }
        e @ ObjectStoreError::InvalidPath { .. } => StorageError::InvalidKey(e.to_string()),
        e => StorageError::UploadFailed(e.to_string()),
    }
}

#[async_trait]
impl Storage for S3Storage {
    async fn put(&self, key: &str, data: Vec<u8>, content_type: &str) -> StorageResult<String> {
        let size = data.len() as u64;
        let location = Path::from(key);

        let mut attributes = Attributes::new();
        attributes.insert(Attribute::ContentType, content_type.to_string().into());
        let opts = PutOptions {
            attributes,
            ..Default::default()
        };

        let start = std::time::Instant::now();

        let result = self
            .store
            .put_opts(&location, PutPayload::from(Bytes::from(data)), opts)
            .await;

        result.map_err(|e| {
            tracing::error!(
                error = %e,
                bucket = %self.bucket,
                key = %key,
                size_bytes = size,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "S3 put failed"
            );
            map_store_error(e)
        })?;

        tracing::info!(
            bucket = %self.bucket,
            key = %key,
            content_type = %content_type,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 put successful"
        );

        Ok(self.public_url(key))
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url.trim_end_matches('/'), key)
    }

    fn backend_name(&self) -> &'static str {
        "s3"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_storage() -> S3Storage {
        S3Storage::new(
            "portfolio".to_string(),
            "auto".to_string(),
            "http://localhost:9000".to_string(),
            "key".to_string(),
            "secret".to_string(),
            "https://cdn.example.com/".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn public_url_joins_base_and_key() {
        let storage = test_storage();
        assert_eq!(
            storage.public_url("gallery/a_1.png"),
            "https://cdn.example.com/gallery/a_1.png"
        );
    }

    #[test]
    fn http_endpoint_is_accepted() {
        // Builder must not reject plain-http local endpoints.
        assert!(test_storage().backend_name() == "s3");
    }
}
