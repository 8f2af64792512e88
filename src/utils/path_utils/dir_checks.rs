use super::expansion::expand_tilde;
use std::fs;
use std::path::PathBuf;

/// Checks if a directory is writable, creating it if it doesn't exist.
///
/// # Errors
///
/// Returns an error if the directory cannot be created, does not resolve to a directory,
/// or a test write fails.
pub fn check_writable_dir(dir: &str) -> Result<PathBuf, String> {
    let expanded_path = expand_tilde(&PathBuf::from(dir))?;

    if !expanded_path.exists() {
        fs::create_dir_all(&expanded_path).map_err(|e| {
            format!(
                "Failed to create directory '{}': {}",
                expanded_path.display(),
                e
            )
        })?;
    }

    if !expanded_path.is_dir() {
        return Err(format!("'{}' is not a directory.", expanded_path.display()));
    }

    match tempfile::tempfile_in(&expanded_path) {
        Ok(_) => Ok(expanded_path),
        Err(e) => Err(format!(
            "Directory '{}' is not writable: {}",
            expanded_path.display(),
            e
        )),
    }
}
