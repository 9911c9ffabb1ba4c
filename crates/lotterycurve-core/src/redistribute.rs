//! Even respacing of intermediate anchor values.
//!
//! Anchor 1 and the last value stay as they are. Active anchor `i` (0-based,
//! `i >= 1`) of `n` active anchors is set to
//! `round(first + (last - first) * i / n)`.
//!
//! The divisor is `n`, not `n - 1`: the highest active anchor lands one step
//! short of `last`, leaving a final step down to the implicit last anchor.

use tracing::debug;

use crate::anchors::active_anchors;
use crate::error::CurveError;
use crate::types::{round_value, Rank, SparseValues};

/// Copy of `values` with intermediate anchors respaced for `total` positions.
///
/// With fewer than two active anchors there is nothing to respace and the
/// values are returned unchanged.
pub fn redistribute_values(values: &SparseValues, total: Rank) -> Result<SparseValues, CurveError> {
    let anchors = active_anchors(total);
    if anchors.len() < 2 {
        return Ok(values.clone());
    }

    let first = values.resolve(anchors[0], total)?;
    let last = values.resolve(total, total)?;
    let count = anchors.len() as f64;

    let mut next = values.clone();
    for (i, &rank) in anchors.iter().enumerate().skip(1) {
        let ratio = i as f64 / count;
        next.anchors
            .insert(rank, round_value(first + (last - first) * ratio) as f64);
    }

    debug!(total, anchors = anchors.len(), "anchor values redistributed");
    Ok(next)
}
