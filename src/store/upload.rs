use crate::store::error::{Result, StoreError};
use crate::store::models::S3StorageClient;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use std::path::Path;
use tracing::debug;

impl S3StorageClient {
    /// Upload a local file as `bucket/key`, returning the ETag without quotes.
    ///
    /// The whole file is read into memory so the payload is signed.
    pub fn upload_file(&self, local_path: &Path, bucket: &str, key: &str) -> Result<Option<String>> {
        if !local_path.is_file() {
            return Err(StoreError::Config(format!(
                "Local file does not exist: {}",
                local_path.display()
            )));
        }

        self.runtime.block_on(async {
            // File-backed streams go out as UNSIGNED-PAYLOAD; an in-memory body
            // gets its SHA-256 into the signature.
            let bytes = tokio::fs::read(local_path).await?;
            debug!("Read {} bytes from {}", bytes.len(), local_path.display());
            let body = ByteStream::from(bytes);

            let response = self
                .client
                .put_object()
                .bucket(bucket)
                .key(key)
                .body(body)
                .send()
                .await
                .map_err(|e| {
                    StoreError::Transfer(format!(
                        "Failed to upload '{}' to storage: {}",
                        key,
                        DisplayErrorContext(&e)
                    ))
                })?;

            let e_tag = response.e_tag().map(|tag| tag.replace('"', ""));
            debug!("Upload of '{}' acknowledged, ETag {:?}", key, e_tag);
            Ok(e_tag)
        })
    }
}
