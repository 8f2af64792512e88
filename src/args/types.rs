use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::validators::validate;
use crate::utils::path_utils::{check_readable_file, check_writable_dir};

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Print extra stuff (use -v -v or --verbose --verbose for even more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// INI file with a [ceph] section: access_key, secret_key, endpoint, root_bucket, protocol
    #[arg(short, long, value_name = "FILE", value_parser = check_readable_file, global = true)]
    pub config: Option<PathBuf>,

    /// Endpoint URL of the object gateway, e.g. http://rgw.local:7480
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Bucket to upload into and download from
    #[arg(long, global = true)]
    pub root_bucket: Option<String>,

    /// Access key, given directly
    #[arg(long, conflicts_with = "access_key_filepath", global = true)]
    pub access_key: Option<String>,

    /// File holding the access key
    #[arg(long, value_name = "PATH", value_parser = check_readable_file, global = true)]
    pub access_key_filepath: Option<PathBuf>,

    /// Secret key, given directly
    #[arg(long, conflicts_with = "secret_key_filepath", global = true)]
    pub secret_key: Option<String>,

    /// File holding the secret key
    #[arg(long, value_name = "PATH", value_parser = check_readable_file, global = true)]
    pub secret_key_filepath: Option<PathBuf>,

    /// Use HTTPS with certificate verification instead of plain HTTP
    #[arg(long, global = true)]
    pub https: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Upload a file into the root bucket, keyed by its file name
    Upload {
        #[arg(value_parser = check_readable_file)]
        file: PathBuf,
    },
    /// Download the most recently modified object of the root bucket
    ReadLast {
        /// Directory to download into instead of a fresh temporary directory
        #[arg(long, value_name = "DIR", value_parser = check_writable_dir)]
        dest_dir: Option<PathBuf>,
    },
    /// List the objects of the root bucket
    List {
        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::List { json: false }
    }
}

impl Args {
    /// Validate argument combinations clap cannot express
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are inconsistent.
    pub fn validate(&self) -> Result<(), String> {
        validate(self)
    }
}
