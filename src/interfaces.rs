use crate::store::error::Result;
use crate::store::models::{BucketRef, FetchedObject, ObjectSummary};
use mockall::automock;
use std::path::Path;

/// Interface for the object-store calls the flows depend on, to facilitate testing
#[automock]
pub trait StoreClient {
    fn list_buckets(&self) -> Result<Vec<BucketRef>>;

    /// Single listing call; continuation pages are not followed
    fn list_objects(&self, bucket: &str) -> Result<Vec<ObjectSummary>>;

    /// Stream an object's body into `dest`, creating or truncating it
    fn get_object_to_path(&self, bucket: &str, key: &str, dest: &Path) -> Result<FetchedObject>;

    /// Upload the full contents of `src`; returns the ETag if the store sent one
    fn put_object_from_path(&self, bucket: &str, key: &str, src: &Path) -> Result<Option<String>>;
}
