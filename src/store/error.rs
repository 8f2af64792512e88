use std::path::PathBuf;
use thiserror::Error;

/// Coarse failure classes, so callers can branch on cause without parsing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Connection,
    Listing,
    NotFound,
    Transfer,
    Integrity,
    Config,
    Io,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Listing error: {0}")]
    Listing(String),

    #[error("Bucket '{0}' not found")]
    BucketNotFound(String),

    #[error("Bucket '{0}' holds no objects")]
    NoObjects(String),

    #[error("Transfer error: {0}")]
    Transfer(String),

    #[error(
        "File length is different ({expected} bytes remote, {actual} bytes local). File is corrupted: {}",
        .path.display()
    )]
    Corrupted {
        expected: u64,
        actual: u64,
        path: PathBuf,
    },

    #[error("Object key '{0}' would escape the destination directory")]
    UnsafeKey(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    pub fn kind(&self) -> FailureKind {
        match self {
            StoreError::Connection(_) => FailureKind::Connection,
            StoreError::Listing(_) => FailureKind::Listing,
            StoreError::BucketNotFound(_) | StoreError::NoObjects(_) => FailureKind::NotFound,
            StoreError::Transfer(_) => FailureKind::Transfer,
            StoreError::Corrupted { .. } => FailureKind::Integrity,
            StoreError::UnsafeKey(_) | StoreError::Config(_) => FailureKind::Config,
            StoreError::Io(_) => FailureKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
