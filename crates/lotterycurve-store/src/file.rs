//! JSON file record slot.
//!
//! Writes go to a sibling temp file which is then renamed over the record,
//! so a crash mid-write leaves the previous record intact.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::record::{RecordSlot, VersionedStore};

/// Curve store backed by a single JSON file.
pub type FileStore = VersionedStore<FileSlot>;

/// A record slot stored at a fixed file path.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl RecordSlot for FileSlot {
    fn read(&self) -> Result<Option<String>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        String::from_utf8(bytes)
            .map(Some)
            .map_err(|e| StoreError::Corrupted(e.to_string()))
    }

    fn write(&self, raw: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.temp_path();
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), bytes = raw.len(), "record written");
        Ok(())
    }

    fn remove(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl VersionedStore<FileSlot> {
    /// Store at an explicit file path. Nothing is touched until first use.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self::new(FileSlot::new(path))
    }

    /// Store at the state path of `config`.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::at(config.state_path())
    }

    pub fn path(&self) -> &Path {
        self.slot().path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lotterycurve_core::{CurveState, CurveStore};

    fn temp_store() -> (FileStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::at(dir.path().join("lotterycurve.json"));
        (store, dir)
    }

    #[test]
    fn empty_store_loads_none() {
        let (store, _dir) = temp_store();
        assert!(store.load().is_none());
    }

    #[test]
    fn save_then_load() {
        let (store, _dir) = temp_store();
        let state = CurveState {
            persons: 15,
            ..CurveState::default()
        };
        store.save(&state);
        assert_eq!(store.load(), Some(state));
    }

    #[test]
    fn save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::at(dir.path().join("nested").join("deeper").join("state.json"));
        store.save(&CurveState::default());
        assert!(store.path().exists());
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let (store, dir) = temp_store();
        store.save(&CurveState::default());
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("lotterycurve.json")]);
    }

    #[test]
    fn old_version_deleted_on_load() {
        let (store, _dir) = temp_store();
        fs::write(store.path(), r#"{"version":1,"persons":29}"#).unwrap();
        assert!(store.load().is_none());
        assert!(!store.path().exists());
    }

    #[test]
    fn corrupt_record_deleted_on_load() {
        let (store, _dir) = temp_store();
        fs::write(store.path(), "{not json").unwrap();
        assert!(store.load().is_none());
        assert!(!store.path().exists());
    }

    #[test]
    fn non_utf8_record_deleted_on_load() {
        let (store, _dir) = temp_store();
        fs::write(store.path(), [0xff, 0xfe, 0x00, 0x7b]).unwrap();
        assert!(matches!(store.try_load(), Err(StoreError::Corrupted(_))));
        assert!(store.load().is_none());
        assert!(!store.path().exists());
    }

    #[test]
    fn clear_removes_file() {
        let (store, _dir) = temp_store();
        store.save(&CurveState::default());
        store.clear();
        assert!(!store.path().exists());
        // Clearing again is a no-op.
        store.clear();
    }

    #[test]
    fn save_failure_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file, not a directory").unwrap();
        let store = FileStore::at(blocker.join("state.json"));

        store.save(&CurveState::default());
        assert!(store.try_save(&CurveState::default()).is_err());
        assert!(store.load().is_none());
    }

    #[test]
    fn temp_path_is_sibling() {
        let slot = FileSlot::new("/tmp/x/state.json");
        assert_eq!(slot.temp_path(), PathBuf::from("/tmp/x/state.json.tmp"));
    }
}
