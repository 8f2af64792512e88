use aws_sdk_s3::Client;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Wire protocol used to reach the endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Protocol {
    #[default]
    Http,
    Https,
}

/// Transport settings scoped to a single client.
///
/// Nothing here touches process-wide state; two clients built with different
/// transport settings do not affect each other.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransportConfig {
    pub protocol: Protocol,
    /// Only meaningful for `Protocol::Https`
    pub verify_tls: bool,
}

impl TransportConfig {
    pub fn https() -> Self {
        Self {
            protocol: Protocol::Https,
            verify_tls: true,
        }
    }
}

/// Connection settings for the Ceph RGW endpoint
#[derive(Clone, PartialEq, Eq)]
pub struct S3Config {
    pub access_key: String,
    pub secret_key: String,
    pub endpoint: String,
    pub root_bucket: String,
    pub transport: TransportConfig,
}

impl S3Config {
    pub fn new(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        endpoint: impl Into<String>,
        root_bucket: impl Into<String>,
    ) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            endpoint: endpoint.into(),
            root_bucket: root_bucket.into(),
            transport: TransportConfig::default(),
        }
    }

    #[must_use]
    pub fn with_transport(mut self, transport: TransportConfig) -> Self {
        self.transport = transport;
        self
    }
}

impl fmt::Debug for S3Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("S3Config")
            .field(
                "access_key",
                &format!("{}****", self.access_key.chars().take(4).collect::<String>()),
            )
            .field("secret_key", &"****")
            .field("endpoint", &self.endpoint)
            .field("root_bucket", &self.root_bucket)
            .field("transport", &self.transport)
            .finish()
    }
}

/// Blocking client for an S3-compatible endpoint
pub struct S3StorageClient {
    pub(crate) client: Client,
    pub(crate) runtime: tokio::runtime::Runtime,
}

/// A bucket as reported by `ListBuckets`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketRef {
    pub name: String,
    pub created: Option<DateTime<Utc>>,
}

impl BucketRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created: None,
        }
    }
}

/// One entry of an object listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectSummary {
    pub key: String,
    pub size: u64,
    pub last_modified: Option<DateTime<Utc>>,
    pub bucket_name: String,
}

impl fmt::Display for ObjectSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.last_modified {
            Some(ts) => write!(f, "{}, {} bytes, {}", self.key, self.size, ts.to_rfc3339()),
            None => write!(f, "{}, {} bytes, unknown", self.key, self.size),
        }
    }
}

/// What the store reported for a completed GET
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FetchedObject {
    pub content_length: Option<u64>,
}

/// Result of a successful upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    pub bucket: String,
    pub key: String,
    pub e_tag: Option<String>,
}

/// A verified local copy of the newest object in the bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedFile {
    pub path: PathBuf,
    pub object: ObjectSummary,
    pub content_length: u64,
}

impl DownloadedFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `file://` URI of the local copy
    pub fn uri(&self) -> String {
        crate::utils::path_utils::file_uri(&self.path)
    }
}
