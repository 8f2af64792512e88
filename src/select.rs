//! Pure selection helpers over listings returned by the store

use crate::store::models::{BucketRef, ObjectSummary};

/// Find the bucket whose name matches `name` exactly
pub fn find_bucket_by_name<'a>(buckets: &'a [BucketRef], name: &str) -> Option<&'a BucketRef> {
    buckets.iter().find(|bucket| bucket.name == name)
}

/// Pick the most recently modified object.
///
/// A candidate is replaced only by a strictly later timestamp, so among equal
/// maxima the first in listing order wins. Objects without a timestamp are
/// never selected. Returns `None` for an empty listing.
pub fn select_latest(objects: &[ObjectSummary]) -> Option<&ObjectSummary> {
    let mut latest: Option<&ObjectSummary> = None;

    for object in objects {
        let Some(current) = object.last_modified else {
            continue;
        };
        let newer = match latest.and_then(|l| l.last_modified) {
            Some(best) => current > best,
            None => true,
        };
        if newer {
            latest = Some(object);
        }
    }

    latest
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn object(key: &str, modified: Option<DateTime<Utc>>) -> ObjectSummary {
        ObjectSummary {
            key: key.to_string(),
            size: 1,
            last_modified: modified,
            bucket_name: "data".to_string(),
        }
    }

    #[test]
    fn empty_listing_selects_nothing() {
        assert!(select_latest(&[]).is_none());
    }

    #[test]
    fn single_object_is_selected() {
        let objects = vec![object("only.txt", Some(at(10)))];
        assert_eq!(select_latest(&objects).unwrap().key, "only.txt");
    }

    #[test]
    fn maximum_timestamp_wins_regardless_of_position() {
        let objects = vec![
            object("a.txt", Some(at(100))),
            object("b.txt", Some(at(300))),
            object("c.txt", Some(at(200))),
        ];
        assert_eq!(select_latest(&objects).unwrap().key, "b.txt");

        let reversed: Vec<_> = objects.into_iter().rev().collect();
        assert_eq!(select_latest(&reversed).unwrap().key, "b.txt");
    }

    #[test]
    fn ties_keep_first_in_listing_order() {
        let objects = vec![
            object("old.txt", Some(at(1))),
            object("first.txt", Some(at(5))),
            object("second.txt", Some(at(5))),
        ];
        assert_eq!(select_latest(&objects).unwrap().key, "first.txt");
    }

    #[test]
    fn objects_without_timestamp_are_skipped() {
        let objects = vec![object("unknown.txt", None), object("known.txt", Some(at(1)))];
        assert_eq!(select_latest(&objects).unwrap().key, "known.txt");
        assert!(select_latest(&[object("unknown.txt", None)]).is_none());
    }

    #[test]
    fn bucket_lookup_is_exact() {
        let buckets = vec![BucketRef::named("data-archive"), BucketRef::named("data")];
        assert_eq!(find_bucket_by_name(&buckets, "data").unwrap().name, "data");
        assert!(find_bucket_by_name(&buckets, "Data").is_none());
        assert!(find_bucket_by_name(&[], "data").is_none());
    }
}
