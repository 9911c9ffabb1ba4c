//! Version-tagged record encoding and the store built on it.
//!
//! A record is the JSON object of a [`CurveState`] with a top-level
//! `"version"` field added:
//!
//! ```text
//! {"version":2,"persons":29,"stake":100,"sponsorship":3000,"values":{...},"sponsored":[...]}
//! ```

use serde_json::Value;
use tracing::{debug, warn};

use lotterycurve_core::constants::STATE_VERSION;
use lotterycurve_core::{CurveState, CurveStore};

use crate::error::StoreError;

const VERSION_FIELD: &str = "version";

/// Encode `state` as a version-tagged JSON record.
pub fn encode(state: &CurveState) -> Result<String, StoreError> {
    let mut value =
        serde_json::to_value(state).map_err(|e| StoreError::Serialization(e.to_string()))?;
    let Value::Object(map) = &mut value else {
        return Err(StoreError::Serialization("state is not a JSON object".into()));
    };
    map.insert(VERSION_FIELD.to_string(), Value::from(STATE_VERSION));
    serde_json::to_string(&value).map_err(|e| StoreError::Serialization(e.to_string()))
}

/// Decode a record written by [`encode`].
///
/// Fails with [`StoreError::VersionMismatch`] if the version tag is missing
/// or differs from [`STATE_VERSION`], and [`StoreError::Corrupted`] if the
/// record is not valid state.
pub fn decode(raw: &str) -> Result<CurveState, StoreError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| StoreError::Corrupted(e.to_string()))?;

    let found = value.get(VERSION_FIELD).and_then(Value::as_u64);
    if found != Some(u64::from(STATE_VERSION)) {
        return Err(StoreError::VersionMismatch {
            found,
            expected: STATE_VERSION,
        });
    }

    serde_json::from_value(value).map_err(|e| StoreError::Corrupted(e.to_string()))
}

/// A single raw record location.
///
/// Slots only move strings; versioning and decoding live in
/// [`VersionedStore`].
pub trait RecordSlot: Send + Sync {
    /// The stored record, or `None` if the slot is empty.
    fn read(&self) -> Result<Option<String>, StoreError>;

    /// Replace the stored record.
    fn write(&self, raw: &str) -> Result<(), StoreError>;

    /// Empty the slot. Removing an empty slot is not an error.
    fn remove(&self) -> Result<(), StoreError>;
}

/// [`CurveStore`] over any [`RecordSlot`].
#[derive(Debug)]
pub struct VersionedStore<S> {
    slot: S,
}

impl<S: RecordSlot> VersionedStore<S> {
    pub fn new(slot: S) -> Self {
        Self { slot }
    }

    /// The underlying slot.
    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Fallible load: `Ok(None)` when the slot is empty.
    ///
    /// Unlike [`CurveStore::load`] this does not delete bad records.
    pub fn try_load(&self) -> Result<Option<CurveState>, StoreError> {
        match self.slot.read()? {
            Some(raw) => decode(&raw).map(Some),
            None => Ok(None),
        }
    }

    /// Fallible save.
    pub fn try_save(&self, state: &CurveState) -> Result<(), StoreError> {
        let raw = encode(state)?;
        self.slot.write(&raw)
    }
}

impl<S: RecordSlot> CurveStore for VersionedStore<S> {
    fn save(&self, state: &CurveState) {
        match self.try_save(state) {
            Ok(()) => debug!(persons = state.persons, "curve state saved"),
            Err(e) => warn!(error = %e, "failed to save curve state"),
        }
    }

    fn load(&self) -> Option<CurveState> {
        match self.try_load() {
            Ok(state) => state,
            Err(StoreError::Io(e)) => {
                warn!(error = %e, "failed to read curve state");
                None
            }
            Err(e) => {
                warn!(error = %e, "discarding stored curve state");
                self.clear();
                None
            }
        }
    }

    fn clear(&self) {
        if let Err(e) = self.slot.remove() {
            warn!(error = %e, "failed to clear curve state");
        }
    }
}
