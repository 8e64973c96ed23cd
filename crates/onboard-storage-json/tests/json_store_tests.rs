use onboard_core::{CoreError, DraftCache, KeyValueStore, LocalDraftCache};
use onboard_domain::{Field, ProfileDraft};
use onboard_storage_json::JsonFileStore;
use std::fs;
use tempfile::tempdir;

const KEY: &str = "onboarding-draft";

#[test]
fn json_store_round_trips_items() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().join("storage")).expect("create store");

    assert_eq!(store.get_item(KEY).expect("read"), None);
    store.set_item(KEY, "{\"hello\":1}").expect("write");

    assert_eq!(
        store.get_item(KEY).expect("read").as_deref(),
        Some("{\"hello\":1}")
    );
    let path = store.item_path(KEY);
    assert_eq!(path.extension().and_then(|ext| ext.to_str()), Some("json"));
    assert!(path.exists());
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn json_store_remove_is_idempotent() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().to_path_buf()).expect("create store");
    store.set_item(KEY, "value").expect("write");

    store.remove_item(KEY).expect("remove");
    store.remove_item(KEY).expect("remove again");

    assert!(!store.item_path(KEY).exists());
}

#[test]
fn draft_cache_persists_seven_field_object() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().to_path_buf()).expect("create store");
    let cache = LocalDraftCache::new(store.clone(), KEY);
    let draft = ProfileDraft::default()
        .with_field(Field::Name, "Ada Lovelace")
        .with_field(Field::Email, "ada@example.com")
        .with_field(Field::Size, "201+");

    cache.save(&draft).expect("save draft");

    let raw = fs::read_to_string(store.item_path(KEY)).expect("read file");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    let object = value.as_object().expect("json object");
    assert_eq!(object.len(), 7);
    assert_eq!(object["companyName"], "");
    assert_eq!(object["size"], "201+");
    assert_eq!(cache.load(), Some(draft));
}

#[test]
fn draft_cache_discards_corrupted_file() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().to_path_buf()).expect("create store");
    fs::write(store.item_path(KEY), "<<definitely not json>>").expect("seed corrupt file");
    let cache = LocalDraftCache::new(store.clone(), KEY);

    assert!(cache.load().is_none());
    assert!(!store.item_path(KEY).exists());
}

#[test]
fn json_store_refuses_file_as_root() {
    let dir = tempdir().expect("tempdir");
    let file = dir.path().join("storage");
    fs::write(&file, "occupied").expect("seed file");

    assert!(matches!(JsonFileStore::new(file), Err(CoreError::Storage(_))));
}
