use crate::store::error::{Result, StoreError};
use crate::store::models::{BucketRef, ObjectSummary, S3StorageClient};
use aws_sdk_s3::error::DisplayErrorContext;
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

impl S3StorageClient {
    /// List every bucket visible to the configured credentials
    pub fn list_buckets(&self) -> Result<Vec<BucketRef>> {
        self.runtime.block_on(async {
            let response = self.client.list_buckets().send().await.map_err(|e| {
                StoreError::Listing(format!("Failed to list buckets: {}", DisplayErrorContext(&e)))
            })?;

            let buckets: Vec<BucketRef> = response
                .buckets()
                .iter()
                .filter_map(|bucket| {
                    bucket.name().map(|name| BucketRef {
                        name: name.to_string(),
                        created: bucket.creation_date().and_then(to_utc),
                    })
                })
                .collect();

            debug!("Found {} buckets", buckets.len());
            Ok(buckets)
        })
    }

    /// List the objects of `bucket` with a single request
    pub fn list_objects(&self, bucket: &str) -> Result<Vec<ObjectSummary>> {
        self.runtime.block_on(async {
            debug!("Listing objects in bucket '{}'", bucket);

            let response = self
                .client
                .list_objects_v2()
                .bucket(bucket)
                .send()
                .await
                .map_err(|e| {
                    StoreError::Listing(format!(
                        "Failed to list objects in '{}': {}",
                        bucket,
                        DisplayErrorContext(&e)
                    ))
                })?;

            if response.is_truncated() == Some(true) {
                warn!(
                    "Listing of '{}' is truncated; only the first page is considered",
                    bucket
                );
            }

            let objects = response
                .contents()
                .iter()
                .filter_map(|object| {
                    object.key().map(|key| ObjectSummary {
                        key: key.to_string(),
                        size: object
                            .size()
                            .and_then(|s| u64::try_from(s).ok())
                            .unwrap_or(0),
                        last_modified: object.last_modified().and_then(to_utc),
                        bucket_name: bucket.to_string(),
                    })
                })
                .collect();

            Ok(objects)
        })
    }
}

fn to_utc(ts: &aws_sdk_s3::primitives::DateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts.secs(), ts.subsec_nanos())
}
