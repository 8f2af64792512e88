use super::connect::{connect, resolve_bucket};
use crate::interfaces::StoreClient;
use crate::store::error::Result;
use crate::store::models::{ObjectSummary, S3Config};
use tracing::{error, info};

/// Connect and list the objects of the configured root bucket
pub fn list_bucket(config: &S3Config) -> Result<Vec<ObjectSummary>> {
    let client = connect(config)?;
    list_with(&client, &config.root_bucket)
}

/// Resolve `root_bucket` and list its objects, logging one line per object
pub fn list_with(client: &dyn StoreClient, root_bucket: &str) -> Result<Vec<ObjectSummary>> {
    let bucket = resolve_bucket(client, root_bucket)?;

    let objects = client
        .list_objects(&bucket.name)
        .inspect_err(|e| error!("cannot list objects of '{}': {e}", bucket.name))?;

    info!("found '{}' files", objects.len());
    for object in &objects {
        info!("{object}");
    }

    Ok(objects)
}
