pub mod bucket;
pub mod client;
pub mod download;
pub mod error;
pub mod models;
pub mod upload;

// Re-export types for convenient access from other modules
pub use client::{DEFAULT_REGION, effective_endpoint, sdk_config};
pub use error::{FailureKind, Result, StoreError};
pub use models::{
    BucketRef, DownloadedFile, FetchedObject, ObjectSummary, Protocol, S3Config, S3StorageClient,
    TransportConfig, UploadResult,
};
