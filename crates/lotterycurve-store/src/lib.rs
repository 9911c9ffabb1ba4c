//! # lotterycurve-store — Versioned persistence for curve state.
//!
//! Implements the [`CurveStore`](lotterycurve_core::CurveStore) port on top
//! of a single raw record slot. Saved state is JSON tagged with
//! [`STATE_VERSION`](lotterycurve_core::constants::STATE_VERSION); a record
//! that fails to parse or carries another version is deleted on load rather
//! than migrated.
//!
//! # Modules
//!
//! - [`error`] — `StoreError` enum
//! - [`config`] — `StoreConfig` with data directory and log level
//! - [`record`] — version-tagged encoding and the `VersionedStore` wrapper
//! - [`file`] — JSON file slot with atomic replace
//! - [`memory`] — in-process slot for tests and embedding

pub mod config;
pub mod error;
pub mod file;
pub mod memory;
pub mod record;

pub use config::StoreConfig;
pub use error::StoreError;
pub use file::{FileSlot, FileStore};
pub use memory::{MemorySlot, MemoryStore};
pub use record::{RecordSlot, VersionedStore};
