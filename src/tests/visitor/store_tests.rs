use std::fs;

use crate::visitor::{FileStore, KeyValueStore, MemoryStore};

fn scratch_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("contactui-{}-{name}.json", std::process::id()))
}

#[test]
fn memory_store_round_trips_values() {
    let mut store = MemoryStore::default();
    assert_eq!(store.get("userName").unwrap(), None);
    store.set("userName", "Sam").unwrap();
    assert_eq!(store.get("userName").unwrap(), Some("Sam".to_string()));
    store.set("userName", "Alex").unwrap();
    assert_eq!(store.get("userName").unwrap(), Some("Alex".to_string()));
}

#[test]
fn file_store_treats_a_missing_file_as_empty() {
    let path = scratch_path("missing");
    let _ = fs::remove_file(&path);
    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.get("userName").unwrap(), None);
}

#[test]
fn file_store_persists_across_reopen() {
    let path = scratch_path("reopen");
    let _ = fs::remove_file(&path);

    let mut store = FileStore::open(&path).unwrap();
    store.set("userName", "Sam").unwrap();
    drop(store);

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.get("userName").unwrap(), Some("Sam".to_string()));

    let _ = fs::remove_file(&path);
}

#[test]
fn file_store_rejects_a_corrupt_file() {
    let path = scratch_path("corrupt");
    fs::write(&path, "not json").unwrap();
    assert!(FileStore::open(&path).is_err());
    let _ = fs::remove_file(&path);
}
