mod dir_checks;
mod download_paths;
mod expansion;
mod file_checks;

pub use dir_checks::check_writable_dir;
pub use download_paths::{
    TEMP_DIR_MODE, TEMP_DIR_PREFIX, create_download_dir, file_uri, object_destination,
};
pub use expansion::expand_tilde;
pub use file_checks::check_readable_file;
