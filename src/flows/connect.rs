use crate::interfaces::StoreClient;
use crate::select::find_bucket_by_name;
use crate::store::error::{Result, StoreError};
use crate::store::models::{BucketRef, S3Config, S3StorageClient};
use tracing::{error, info};

/// Build a client for `config`, logging why it could not be built
pub fn connect(config: &S3Config) -> Result<S3StorageClient> {
    S3StorageClient::connect(config).inspect_err(|e| error!("cannot connect to Ceph: {e}"))
}

/// List the visible buckets and pick the one named `root_bucket`
pub fn resolve_bucket(client: &dyn StoreClient, root_bucket: &str) -> Result<BucketRef> {
    let buckets = client
        .list_buckets()
        .inspect_err(|e| error!("cannot connect to Ceph: {e}"))?;

    info!("Ceph connection initiated!");

    match find_bucket_by_name(&buckets, root_bucket) {
        Some(bucket) => Ok(bucket.clone()),
        None => {
            error!(
                "Cannot read bucket '{}' from Ceph ({} buckets visible)",
                root_bucket,
                buckets.len()
            );
            Err(StoreError::BucketNotFound(root_bucket.to_string()))
        }
    }
}
