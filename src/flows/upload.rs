use super::connect::{connect, resolve_bucket};
use crate::interfaces::StoreClient;
use crate::store::error::{Result, StoreError};
use crate::store::models::{S3Config, UploadResult};
use std::path::Path;
use tracing::{error, info};

/// Upload `file` into the root bucket under its base name.
///
/// An existing object with the same key is overwritten.
pub fn write_file(config: &S3Config, file: &Path) -> Result<UploadResult> {
    let client = connect(config)?;
    upload_with(&client, &config.root_bucket, file)
}

pub fn upload_with(client: &dyn StoreClient, root_bucket: &str, file: &Path) -> Result<UploadResult> {
    let key = object_key_for(file).inspect_err(|e| error!("{e}"))?;
    let bucket = resolve_bucket(client, root_bucket)?;

    info!("start uploading file '{}' to Ceph...", key);
    let e_tag = client
        .put_object_from_path(&bucket.name, &key, file)
        .inspect_err(|e| error!("Cannot upload file '{}' to Ceph: {e}", key))?;
    info!("uploading '{}' finished!", key);

    Ok(UploadResult {
        bucket: bucket.name,
        key,
        e_tag,
    })
}

/// Object key for a local file: its base name
fn object_key_for(file: &Path) -> Result<String> {
    if !file.is_file() {
        return Err(StoreError::Config(format!(
            "Local file does not exist: {}",
            file.display()
        )));
    }

    file.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| {
            StoreError::Config(format!(
                "Local file '{}' has no UTF-8 file name",
                file.display()
            ))
        })
}
