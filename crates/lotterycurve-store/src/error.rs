//! Store error types.

use thiserror::Error;

/// Errors raised by record slots and record decoding.
///
/// These never cross the [`CurveStore`](lotterycurve_core::CurveStore)
/// boundary; the store logs them and degrades to "nothing persisted".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Underlying storage could not be read or written.
    #[error("I/O error: {0}")]
    Io(String),

    /// State could not be encoded.
    #[error("serialization: {0}")]
    Serialization(String),

    /// Stored record is not valid curve state.
    #[error("corrupted record: {0}")]
    Corrupted(String),

    /// Stored record carries a different schema version.
    #[error("version mismatch: found {found:?}, expected {expected}")]
    VersionMismatch {
        /// Version tag in the record, if any.
        found: Option<u64>,
        /// Version this build reads and writes.
        expected: u32,
    },
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
