//! S3-compatible object store client.
//!
//! One bucket holds one blob per asset, keyed by object key. The client
//! targets MinIO in development and any S3-compatible store in production,
//! so the endpoint is overridden and path-style addressing is forced.
//!
//! - [`ObjectStore::ensure_bucket`] — Idempotent check-then-create, run
//!   once at process startup
//! - [`ObjectStore::put`] — Store a blob under a key with its content type
//! - [`ObjectStore::presign_get`] — Time-limited capability URL for one blob
//! - [`ObjectStore::delete`] — Remove a blob

use anyhow::Result;
use aws_config::BehaviorVersion;
use aws_config::Region;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use std::time::Duration;
use vtt_core::Config;

pub struct ObjectStore {
    client: Client,
    bucket: String,
}

impl ObjectStore {
    /// Builds a client against the configured endpoint and credentials.
    pub async fn connect(config: &Config) -> Self {
        let credentials = Credentials::from_keys(
            config.store_access_key.clone(),
            config.store_secret_key.clone(),
            None,
        );
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.store_region.clone()))
            .endpoint_url(config.store_endpoint.clone())
            .credentials_provider(credentials)
            .load()
            .await;
        // MinIO does not serve virtual-hosted bucket URLs
        let conf = aws_sdk_s3::config::Builder::from(&shared)
            .force_path_style(true)
            .build();
        Self {
            client: Client::from_conf(conf),
            bucket: config.bucket.clone(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Idempotent bucket provisioning: HEAD the bucket, create it only
    /// when the store reports it missing. Any other failure propagates.
    pub async fn ensure_bucket(&self) -> Result<()> {
        match self.client.head_bucket().bucket(&self.bucket).send().await {
            Ok(_) => {
                log::info!("bucket {} already exists", self.bucket);
                Ok(())
            }
            Err(e) if e.as_service_error().is_some_and(|s| s.is_not_found()) => {
                log::info!("creating bucket {}", self.bucket);
                self.client
                    .create_bucket()
                    .bucket(&self.bucket)
                    .send()
                    .await?;
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Writes a blob under the given key with its declared content type.
    pub async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<()> {
        log::debug!("writing {} bytes to {}/{}", bytes.len(), self.bucket, key);
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await?;
        Ok(())
    }

    /// Generates a presigned GET URL valid for `expiry`.
    ///
    /// SigV4 caps presigned validity at 7 days; a longer expiry fails here
    /// rather than being silently clamped.
    pub async fn presign_get(&self, key: &str, expiry: Duration) -> Result<String> {
        let presigned = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(PresigningConfig::expires_in(expiry)?)
            .await?;
        Ok(presigned.uri().to_string())
    }

    /// Removes a blob. Not called on world deletion: dereferenced blobs
    /// are left for an external reconciliation job.
    pub async fn delete(&self, key: &str) -> Result<()> {
        log::debug!("deleting {}/{}", self.bucket, key);
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await?;
        Ok(())
    }
}
