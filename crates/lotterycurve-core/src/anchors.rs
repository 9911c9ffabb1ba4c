//! Control-point selection.
//!
//! The candidate anchors are fixed ([`ANCHOR_RANKS`]); a curve of `total`
//! positions uses the candidates strictly below `total`, followed by `total`
//! itself. Because the filter is strict the final rank is never duplicated.

use crate::constants::ANCHOR_RANKS;
use crate::error::CurveError;
use crate::types::{AnchorKey, Rank};

/// Fixed anchors strictly below `total`, ascending.
///
/// Empty for `total <= 1`.
pub fn active_anchors(total: Rank) -> Vec<Rank> {
    ANCHOR_RANKS.iter().copied().filter(|&rank| rank < total).collect()
}

/// All control points for `total` positions: the active anchors plus `total`.
pub fn control_points(total: Rank) -> Vec<Rank> {
    let mut points = active_anchors(total);
    points.push(total);
    points
}

/// Control points that get an individual slider: everything but the last.
pub fn slider_positions(total: Rank) -> Vec<Rank> {
    active_anchors(total)
}

/// Resolve a drag on control point `index` into the anchor it edits.
///
/// Indices follow [`control_points`]; the final one maps to
/// [`AnchorKey::Last`].
pub fn drag_target(index: usize, total: Rank) -> Result<AnchorKey, CurveError> {
    let points = control_points(total);
    match points.get(index) {
        Some(_) if index + 1 == points.len() => Ok(AnchorKey::Last),
        Some(&rank) => Ok(AnchorKey::Rank(rank)),
        None => Err(CurveError::DragIndexOutOfRange {
            index,
            count: points.len(),
        }),
    }
}
