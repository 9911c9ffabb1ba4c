//! Piecewise-linear expansion of anchor values into a dense curve.
//!
//! Each control point is emitted at its own rounded value; ranks strictly
//! between two control points get `round(cv + (nv - cv) * t)` with
//! `t = (rank - current) / (next - current)`. Rounding is applied per rank,
//! so a monotonic input may still produce a flat or slightly uneven step
//! between neighbours.

use tracing::debug;

use crate::anchors::{active_anchors, control_points};
use crate::error::CurveError;
use crate::types::{round_value, PositionEntry, Rank, SparseValues};

/// Expand `values` into one entry per rank `1..=total`.
///
/// Fails if `total` is zero or any control point lacks a finite value.
pub fn calculate_positions(
    total: Rank,
    values: &SparseValues,
) -> Result<Vec<PositionEntry>, CurveError> {
    if total == 0 {
        return Err(CurveError::NoPositions);
    }

    let points = control_points(total);
    // Resolve every control point up front so a missing anchor fails
    // before any entry is produced.
    let resolved = points
        .iter()
        .map(|&rank| values.resolve(rank, total).map(|value| (rank, value)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut positions = Vec::with_capacity(total as usize);
    for (i, &(current, current_val)) in resolved.iter().enumerate() {
        positions.push(PositionEntry::new(current, round_value(current_val)));

        let Some(&(next, next_val)) = resolved.get(i + 1) else {
            break;
        };
        let span = f64::from(next - current);
        for rank in current + 1..next {
            let t = f64::from(rank - current) / span;
            let cost = round_value(current_val + (next_val - current_val) * t);
            positions.push(PositionEntry::new(rank, cost));
        }
    }

    debug!(total, control_points = points.len(), "curve interpolated");
    Ok(positions)
}

/// Copy of `values` with an entry for every active anchor of `total`.
///
/// Missing anchors are interpolated between the nearest known neighbours
/// (present anchors below `total`, and `last` at `total`); a missing anchor
/// with no known neighbour below it takes the value of the next one above.
/// Used when the position count changes and new anchors become active.
pub fn fill_missing_anchors(values: &SparseValues, total: Rank) -> SparseValues {
    let mut known: Vec<(Rank, f64)> = values
        .anchors
        .iter()
        .filter(|&(&rank, _)| rank < total)
        .map(|(&rank, &value)| (rank, value))
        .collect();
    known.push((total, values.last));

    let mut filled = values.clone();
    for rank in active_anchors(total) {
        if filled.anchors.contains_key(&rank) {
            continue;
        }
        let below = known.iter().rev().find(|(r, _)| *r < rank);
        // `known` always ends with `total`, which is above every active anchor.
        let Some(&(hi_rank, hi_val)) = known.iter().find(|(r, _)| *r > rank) else {
            continue;
        };
        let value = match below {
            Some(&(lo_rank, lo_val)) => {
                let t = f64::from(rank - lo_rank) / f64::from(hi_rank - lo_rank);
                round_value(lo_val + (hi_val - lo_val) * t) as f64
            }
            None => hi_val,
        };
        debug!(rank, value, "filled missing anchor");
        filled.anchors.insert(rank, value);
    }
    filled
}
