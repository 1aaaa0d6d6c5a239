use std::fs;

use hotlist::pipeline::SNAPSHOT_FILE;
use hotlist::{
    CanonicalItem, DailyStore, HotClient, HotError, dedupe, items_from_payload, write_outputs,
};

use crate::common;

#[test]
fn offline_payload_is_normalized_and_deduped() {
    let mut payload: serde_json::Value =
        serde_json::from_str(&common::fixture("hot_api.json")).unwrap();
    let first = payload["data"][0].clone();
    payload["data"].as_array_mut().unwrap().push(first);

    let client = HotClient::default();
    let items = items_from_payload(payload, client.canonicalizer());
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].href, "https://www.zhihu.com/question/1001");
    assert_eq!(items[1].href, "https://www.zhihu.com/question/1002");
}

#[test]
fn payload_without_data_yields_nothing() {
    let client = HotClient::default();
    assert!(items_from_payload(serde_json::json!([1, 2]), client.canonicalizer()).is_empty());
}

#[test]
fn outputs_write_snapshot_and_merge_day() {
    let dir = tempfile::tempdir().unwrap();
    let store = DailyStore::new(dir.path());
    let client = HotClient::default();
    let payload = serde_json::from_str(&common::fixture("hot_api.json")).unwrap();
    let items = dedupe(items_from_payload(payload, client.canonicalizer()));

    let summary = write_outputs(&store, "2024-05-01", &items).unwrap();
    assert_eq!(summary.date_key, "2024-05-01");
    assert_eq!(summary.total, 2);
    assert_eq!(summary.new_items, 2);
    assert_eq!(summary.day_total, 2);

    let snapshot: Vec<CanonicalItem> =
        serde_json::from_str(&fs::read_to_string(dir.path().join(SNAPSHOT_FILE)).unwrap())
            .unwrap();
    assert_eq!(snapshot, items);

    // The snapshot holds only the latest run; the day file keeps both.
    let later = vec![CanonicalItem::with_href("https://www.zhihu.com/question/9")];
    let summary = write_outputs(&store, "2024-05-01", &later).unwrap();
    assert_eq!(summary.new_items, 1);
    assert_eq!(summary.day_total, 3);
    let snapshot: Vec<CanonicalItem> =
        serde_json::from_str(&fs::read_to_string(dir.path().join(SNAPSHOT_FILE)).unwrap())
            .unwrap();
    assert_eq!(snapshot, later);
}

#[test]
fn bad_date_key_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let store = DailyStore::new(dir.path());
    let err = write_outputs(&store, "yesterday", &[]).unwrap_err();
    assert!(matches!(err, HotError::InvalidDateKey(_)));
    assert!(!dir.path().join(SNAPSHOT_FILE).exists());
}
