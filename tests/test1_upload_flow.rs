mod common;

use ceph_object_sync::flows::{read_latest_with, upload_with};
use ceph_object_sync::interfaces::MockStoreClient;
use ceph_object_sync::store::{BucketRef, FailureKind, StoreError};
use common::InMemoryStore;
use std::fs;

#[test]
fn upload_then_download_round_trips_content() -> Result<(), Box<dyn std::error::Error>> {
    let store = InMemoryStore::with_buckets(&["data", "other"]);

    let src_dir = tempfile::tempdir()?;
    let source = src_dir.path().join("f.txt");
    fs::write(&source, "Message")?;

    let uploaded = upload_with(&store, "data", &source)?;
    assert_eq!(uploaded.bucket, "data");
    assert_eq!(uploaded.key, "f.txt");
    assert_eq!(uploaded.e_tag.as_deref(), Some("etag-f.txt"));

    let dest_dir = tempfile::tempdir()?;
    let downloaded = read_latest_with(&store, "data", Some(dest_dir.path()))?;

    assert_eq!(downloaded.path, dest_dir.path().join("f.txt"));
    assert_eq!(downloaded.content_length, 7);
    assert_eq!(fs::read_to_string(&downloaded.path)?, "Message");
    assert_eq!(
        fs::metadata(&source)?.len(),
        fs::metadata(&downloaded.path)?.len()
    );
    Ok(())
}

#[test]
fn reupload_overwrites_and_becomes_latest() -> Result<(), Box<dyn std::error::Error>> {
    let store = InMemoryStore::with_buckets(&["data"]);
    let dir = tempfile::tempdir()?;

    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");
    fs::write(&first, "one")?;
    fs::write(&second, "two")?;

    upload_with(&store, "data", &first)?;
    upload_with(&store, "data", &second)?;
    fs::write(&first, "one, again")?;
    upload_with(&store, "data", &first)?;
    assert_eq!(store.object_count(), 2);

    let dest = tempfile::tempdir()?;
    let downloaded = read_latest_with(&store, "data", Some(dest.path()))?;
    assert_eq!(downloaded.object.key, "first.txt");
    assert_eq!(fs::read_to_string(downloaded.path)?, "one, again");
    Ok(())
}

#[test]
fn missing_root_bucket_stops_before_upload() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("f.txt");
    fs::write(&source, "Message").unwrap();

    let mut client = MockStoreClient::new();
    client
        .expect_list_buckets()
        .times(1)
        .returning(|| Ok(vec![BucketRef::named("other")]));
    client.expect_put_object_from_path().never();
    client.expect_list_objects().never();

    let err = upload_with(&client, "data", &source).unwrap_err();
    assert!(matches!(err, StoreError::BucketNotFound(ref name) if name == "data"));
    assert_eq!(err.kind(), FailureKind::NotFound);
}

#[test]
fn bucket_listing_failure_is_reported_as_listing() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("f.txt");
    fs::write(&source, "Message").unwrap();

    let mut client = MockStoreClient::new();
    client
        .expect_list_buckets()
        .times(1)
        .returning(|| Err(StoreError::Listing("AccessDenied".to_string())));
    client.expect_put_object_from_path().never();

    let err = upload_with(&client, "data", &source).unwrap_err();
    assert_eq!(err.kind(), FailureKind::Listing);
}

#[test]
fn put_failure_is_not_retried() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("report.csv");
    fs::write(&source, "a,b\n1,2\n").unwrap();
    let expected_source = source.clone();

    let mut client = MockStoreClient::new();
    client
        .expect_list_buckets()
        .times(1)
        .returning(|| Ok(vec![BucketRef::named("data")]));
    client
        .expect_put_object_from_path()
        .times(1)
        .returning(move |bucket, key, src| {
            assert_eq!(bucket, "data");
            assert_eq!(key, "report.csv");
            assert_eq!(src, expected_source.as_path());
            Err(StoreError::Transfer("QuotaExceeded".to_string()))
        });

    let err = upload_with(&client, "data", &source).unwrap_err();
    assert_eq!(err.kind(), FailureKind::Transfer);
}

#[test]
fn missing_local_file_fails_without_store_calls() {
    let dir = tempfile::tempdir().unwrap();
    let client = MockStoreClient::new();

    let err = upload_with(&client, "data", &dir.path().join("nope.txt")).unwrap_err();
    assert_eq!(err.kind(), FailureKind::Config);
}
