use super::connect::connect;
use super::listing::list_with;
use crate::interfaces::StoreClient;
use crate::select::select_latest;
use crate::store::error::{Result, StoreError};
use crate::store::models::{DownloadedFile, S3Config};
use crate::utils::path_utils::{create_download_dir, file_uri, object_destination};
use std::fs;
use std::path::Path;
use tracing::{error, info, warn};

/// Download the most recently modified object of the root bucket.
///
/// With no `destination`, a fresh `ceph_temp_folder_*` directory is created and
/// left behind for the caller. A length mismatch fails the call but keeps the
/// partial file on disk.
pub fn read_last_file(config: &S3Config, destination: Option<&Path>) -> Result<DownloadedFile> {
    let client = connect(config)?;
    read_latest_with(&client, &config.root_bucket, destination)
}

pub fn read_latest_with(
    client: &dyn StoreClient,
    root_bucket: &str,
    destination: Option<&Path>,
) -> Result<DownloadedFile> {
    let objects = list_with(client, root_bucket)?;

    let Some(latest) = select_latest(&objects) else {
        error!("Cannot read last modified object from bucket '{}'", root_bucket);
        return Err(StoreError::NoObjects(root_bucket.to_string()));
    };
    info!("found last modified file: {}", latest.key);

    let dir = match destination {
        Some(dir) => dir.to_path_buf(),
        None => create_download_dir()
            .inspect_err(|e| error!("Cannot create temporary local directory: {e}"))?,
    };

    let local = object_destination(&dir, &latest.key).inspect_err(|e| error!("{e}"))?;
    if let Some(parent) = local.parent() {
        fs::create_dir_all(parent).inspect_err(|e| {
            error!("Cannot create local directory {}: {e}", parent.display())
        })?;
    }
    info!("created temporary file: {}", file_uri(&local));

    info!("start downloading file from Ceph...");
    let fetched = client
        .get_object_to_path(&latest.bucket_name, &latest.key, &local)
        .inspect_err(|e| error!("Cannot download '{}': {e}", latest.key))?;

    let expected = fetched.content_length.unwrap_or_else(|| {
        warn!(
            "Store sent no content length for '{}'; using listed size",
            latest.key
        );
        latest.size
    });
    let actual = fs::metadata(&local)
        .inspect_err(|e| error!("Cannot stat downloaded file {}: {e}", local.display()))?
        .len();
    info!("Ceph file length: {} bytes", expected);
    info!("downloaded local file length: {} bytes", actual);

    if expected != actual {
        let err = StoreError::Corrupted {
            expected,
            actual,
            path: local,
        };
        error!("{err}");
        return Err(err);
    }

    log_file_content(&local);

    Ok(DownloadedFile {
        path: local,
        object: latest.clone(),
        content_length: actual,
    })
}

fn log_file_content(path: &Path) {
    match fs::read(path) {
        Ok(bytes) => {
            info!("downloaded local file content:");
            for line in String::from_utf8_lossy(&bytes).lines() {
                info!("{line}");
            }
        }
        Err(e) => error!("cannot print downloaded file: {e}"),
    }
}
