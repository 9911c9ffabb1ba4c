//! Error types for curve computation.
use thiserror::Error;

use crate::types::AnchorKey;

/// Invalid input to a curve operation.
///
/// Every variant is a precondition violation by the caller; none of them
/// depend on external state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    #[error("invalid input: a curve needs at least one position")] NoPositions,
    #[error("invalid input: no value for anchor rank {rank}")] MissingAnchor { rank: u32 },
    #[error("invalid input: value for {key} is not finite: {value}")] NonFiniteValue { key: AnchorKey, value: f64 },
    #[error("invalid input: drag index {index} out of range for {count} control points")] DragIndexOutOfRange { index: usize, count: usize },
}
