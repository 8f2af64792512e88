pub mod args;
pub mod flows;
pub mod interfaces;
pub mod select;
pub mod start;
pub mod store;
pub mod utils;

pub use args::Args;
pub use flows::{list_bucket, read_last_file, write_file};
pub use start::run_app;
pub use store::{
    DownloadedFile, FailureKind, ObjectSummary, S3Config, StoreError, TransportConfig,
    UploadResult,
};
