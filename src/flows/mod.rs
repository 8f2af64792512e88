//! Caller-facing operations against the configured root bucket.
//!
//! Each call connects, resolves the bucket by name, and does its work without
//! keeping state between invocations. Failures are logged where they happen and
//! returned as [`StoreError`](crate::store::StoreError); nothing is retried.

pub mod connect;
pub mod download;
pub mod listing;
pub mod upload;

pub use connect::{connect, resolve_bucket};
pub use download::{read_last_file, read_latest_with};
pub use listing::{list_bucket, list_with};
pub use upload::{upload_with, write_file};
