//! Store behaviour through the `CurveStore` port only.

use std::fs;

use lotterycurve_core::{AnchorKey, CurveEngine, CurveState, CurveStore, SponsoredItem};
use lotterycurve_store::{FileStore, MemoryStore, StoreConfig};

fn edited_state() -> CurveState {
    let state = CurveEngine::add_sponsored(
        &CurveState::default(),
        SponsoredItem::new("Premium Wine", 410.0),
    );
    CurveEngine::edit(&state, AnchorKey::Rank(3), 333.0).unwrap()
}

fn stores(dir: &tempfile::TempDir) -> Vec<Box<dyn CurveStore>> {
    vec![
        Box::new(MemoryStore::in_memory()),
        Box::new(FileStore::at(dir.path().join("state.json"))),
    ]
}

#[test]
fn round_trip_through_port() {
    let dir = tempfile::tempdir().unwrap();
    for store in stores(&dir) {
        let state = edited_state();
        store.save(&state);
        assert_eq!(store.load(), Some(state));
        store.clear();
        assert_eq!(store.load(), None);
    }
}

#[test]
fn persistence_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig {
        data_dir: dir.path().to_path_buf(),
        ..StoreConfig::default()
    };

    let state = edited_state();
    FileStore::from_config(&config).save(&state);

    let reopened = FileStore::from_config(&config);
    assert_eq!(reopened.load(), Some(state));
}

#[test]
fn saved_file_is_tagged_json() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::at(dir.path().join("state.json"));
    store.save(&edited_state());

    let raw = fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["version"], 2);
    assert_eq!(value["sponsored"][0]["name"], "Premium Wine");
    assert_eq!(value["values"]["anchors"]["3"], 333.0);
}

#[test]
fn outdated_record_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::at(dir.path().join("state.json"));
    fs::write(store.path(), r#"{"version":1,"persons":12}"#).unwrap();

    assert_eq!(store.load_or_default(), CurveState::default());
    assert!(!store.path().exists());
}

#[test]
fn loaded_state_computes() {
    let store = MemoryStore::in_memory();
    store.save(&edited_state());
    let state = store.load().unwrap();
    let report = CurveEngine::compute(&state).unwrap();
    assert_eq!(report.positions[2].cost, 333);
    assert_eq!(report.sponsored().count(), 1);
}
