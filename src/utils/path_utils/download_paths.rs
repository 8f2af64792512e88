use crate::store::error::{Result, StoreError};
use std::path::{Component, Path, PathBuf};

/// Prefix of the per-download temporary directory
pub const TEMP_DIR_PREFIX: &str = "ceph_temp_folder_";

/// rwxr--r--
pub const TEMP_DIR_MODE: u32 = 0o744;

/// Create a fresh download directory under the system temp dir.
///
/// The directory is kept on disk; the caller owns its removal.
pub fn create_download_dir() -> std::io::Result<PathBuf> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(TEMP_DIR_PREFIX);

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(TEMP_DIR_MODE));
    }

    Ok(builder.tempdir()?.keep())
}

/// Local path for object `key` inside `dir`.
///
/// Keys are used verbatim as relative paths. Absolute keys, keys with `..` and
/// directory markers (`reports/`) are refused rather than rewritten.
pub fn object_destination(dir: &Path, key: &str) -> Result<PathBuf> {
    if key.ends_with('/') || key.ends_with('\\') {
        return Err(StoreError::UnsafeKey(key.to_string()));
    }

    let relative = Path::new(key);
    let mut has_name = false;

    for component in relative.components() {
        match component {
            Component::Normal(_) => has_name = true,
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(StoreError::UnsafeKey(key.to_string()));
            }
        }
    }

    if !has_name {
        return Err(StoreError::UnsafeKey(key.to_string()));
    }

    Ok(dir.join(relative))
}

/// `file://` reference to the absolute form of `path`
pub fn file_uri(path: &Path) -> String {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let text = absolute.to_string_lossy().replace('\\', "/");
    if text.starts_with('/') {
        format!("file://{text}")
    } else {
        format!("file:///{text}")
    }
}
