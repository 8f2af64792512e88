use crate::store::error::{Result, StoreError};
use crate::store::models::{FetchedObject, S3StorageClient};
use aws_sdk_s3::error::DisplayErrorContext;
use std::path::Path;
use tokio::io::AsyncWriteExt;
use tracing::debug;

impl S3StorageClient {
    /// Stream an object into `dest` without buffering it in memory
    pub fn download_to_path(&self, bucket: &str, key: &str, dest: &Path) -> Result<FetchedObject> {
        self.runtime.block_on(async {
            debug!("S3 download request: bucket={} key={}", bucket, key);

            let response = self
                .client
                .get_object()
                .bucket(bucket)
                .key(key)
                .send()
                .await
                .map_err(|e| {
                    StoreError::Transfer(format!(
                        "Failed to download '{}' from storage: {}",
                        key,
                        DisplayErrorContext(&e)
                    ))
                })?;

            let content_length = response
                .content_length()
                .and_then(|len| u64::try_from(len).ok());
            debug!(
                "S3 download response received\nContent length: {:?}\nE-Tag: {:?}",
                content_length,
                response.e_tag()
            );

            let mut body = response.body.into_async_read();
            let mut file = tokio::fs::File::create(dest).await?;
            let written = tokio::io::copy(&mut body, &mut file).await.map_err(|e| {
                StoreError::Transfer(format!("Failed to read response body for '{}': {}", key, e))
            })?;
            file.flush().await?;

            debug!("Wrote {} bytes to {}", written, dest.display());
            Ok(FetchedObject { content_length })
        })
    }
}
