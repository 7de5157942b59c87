//! Remote object-storage upload for exported reports.
//!
//! Thin wrapper over the AWS S3 SDK. Credentials come from the standard
//! environment/profile chain; only the bucket and region are configured
//! here. Upload failures are recoverable errors surfaced to the caller,
//! never fatal to the process.

use crate::config::AwsSettings;
use crate::report::ExportFormat;
use anyhow::{Context, Result, anyhow};
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;
use std::path::Path;
use tracing::info;

/// S3 client bound to one configured bucket.
#[derive(Clone)]
pub struct ObjectStoreUploader {
    client: Client,
    bucket: String,
}

impl ObjectStoreUploader {
    /// Create an uploader from app settings.
    ///
    /// Async because the AWS config loader resolves the credential chain.
    pub async fn new(settings: &AwsSettings) -> Self {
        let aws_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(settings.region.clone()))
            .load()
            .await;

        Self {
            client: Client::new(&aws_config),
            bucket: settings.s3_bucket.clone(),
        }
    }

    /// Upload a local file under its file name as the object key.
    ///
    /// The content type is inferred from the file extension. Returns the
    /// `s3://bucket/key` URI of the uploaded object.
    pub async fn upload_file(&self, path: &Path) -> Result<String> {
        let key = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| anyhow!("Upload path has no file name: {}", path.display()))?
            .to_string();

        let body = ByteStream::from_path(path)
            .await
            .with_context(|| format!("Failed to read {} for upload", path.display()))?;

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type(content_type_for(path))
            .body(body)
            .send()
            .await
            .with_context(|| format!("Failed to upload {} to bucket {}", key, self.bucket))?;

        let uri = format!("s3://{}/{}", self.bucket, key);
        info!("Uploaded {} to {}", path.display(), uri);
        Ok(uri)
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

/// MIME type for an upload, derived from the file extension.
fn content_type_for(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(ExportFormat::from_extension)
        .map(ExportFormat::content_type)
        .unwrap_or("application/octet-stream")
}
