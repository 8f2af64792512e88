#![allow(dead_code)]

use ceph_object_sync::interfaces::StoreClient;
use ceph_object_sync::store::{BucketRef, FetchedObject, ObjectSummary, Result, StoreError};
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::cell::RefCell;
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Object store kept in memory; every put is stamped one second after the last
pub struct InMemoryStore {
    buckets: Vec<String>,
    objects: RefCell<Vec<(ObjectSummary, Vec<u8>)>>,
    clock: RefCell<DateTime<Utc>>,
}

impl InMemoryStore {
    pub fn with_buckets(names: &[&str]) -> Self {
        Self {
            buckets: names.iter().map(|n| n.to_string()).collect(),
            objects: RefCell::new(Vec::new()),
            clock: RefCell::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
        }
    }

    pub fn object_count(&self) -> usize {
        self.objects.borrow().len()
    }

    fn tick(&self) -> DateTime<Utc> {
        let mut clock = self.clock.borrow_mut();
        *clock += Duration::seconds(1);
        *clock
    }
}

impl StoreClient for InMemoryStore {
    fn list_buckets(&self) -> Result<Vec<BucketRef>> {
        Ok(self.buckets.iter().map(BucketRef::named).collect())
    }

    fn list_objects(&self, bucket: &str) -> Result<Vec<ObjectSummary>> {
        Ok(self
            .objects
            .borrow()
            .iter()
            .filter(|(summary, _)| summary.bucket_name == bucket)
            .map(|(summary, _)| summary.clone())
            .collect())
    }

    fn get_object_to_path(&self, bucket: &str, key: &str, dest: &Path) -> Result<FetchedObject> {
        let objects = self.objects.borrow();
        let (_, body) = objects
            .iter()
            .find(|(s, _)| s.bucket_name == bucket && s.key == key)
            .ok_or_else(|| StoreError::Transfer(format!("NoSuchKey: {key}")))?;
        std::fs::write(dest, body)?;
        Ok(FetchedObject {
            content_length: Some(body.len() as u64),
        })
    }

    fn put_object_from_path(&self, bucket: &str, key: &str, src: &Path) -> Result<Option<String>> {
        let body = std::fs::read(src)?;
        let summary = ObjectSummary {
            key: key.to_string(),
            size: body.len() as u64,
            last_modified: Some(self.tick()),
            bucket_name: bucket.to_string(),
        };
        let mut objects = self.objects.borrow_mut();
        objects.retain(|(s, _)| !(s.bucket_name == bucket && s.key == key));
        objects.push((summary, body));
        Ok(Some(format!("etag-{key}")))
    }
}

pub fn summary(key: &str, size: u64, secs: i64) -> ObjectSummary {
    ObjectSummary {
        key: key.to_string(),
        size,
        last_modified: Some(Utc.timestamp_opt(secs, 0).unwrap()),
        bucket_name: "data".to_string(),
    }
}

/// Log sink shared between a test and a scoped tracing subscriber
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Run `f` with every tracing event of this thread written to the returned logs
pub fn with_captured_logs<R>(f: impl FnOnce() -> R) -> (R, CapturedLogs) {
    let logs = CapturedLogs::default();
    let sink = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || sink.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, logs)
}
