//! Full curve pipeline over a [`CurveState`].
//!
//! [`CurveEngine::compute`] runs interpolation, sponsorship and aggregation
//! in order. The editing helpers return a new state and leave their input
//! alone, so a caller can keep the old one for undo.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::aggregate::CurveSummary;
use crate::anchors::drag_target;
use crate::chart::ChartSeries;
use crate::error::CurveError;
use crate::interpolate::{calculate_positions, fill_missing_anchors};
use crate::redistribute::redistribute_values;
use crate::sponsorship::apply_sponsored_items;
use crate::types::{AnchorKey, CurveState, PositionEntry, SponsoredItem};

/// Everything derived from one [`CurveState`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CurveReport {
    /// Interpolated curve before sponsorship.
    pub base: Vec<PositionEntry>,
    /// Curve with sponsored items overlaid.
    pub positions: Vec<PositionEntry>,
    /// Totals for `positions`.
    pub summary: CurveSummary,
    /// Display series for `positions`.
    pub chart: ChartSeries,
}

impl CurveReport {
    /// Entries claimed by sponsored items.
    pub fn sponsored(&self) -> impl Iterator<Item = &PositionEntry> {
        self.positions.iter().filter(|p| p.sponsored)
    }
}

/// Stateless driver for the curve pipeline.
#[derive(Debug, Clone, Default)]
pub struct CurveEngine;

impl CurveEngine {
    /// Compute the curve, its sponsored overlay and summary for `state`.
    pub fn compute(state: &CurveState) -> Result<CurveReport, CurveError> {
        let base = calculate_positions(state.persons, &state.values)?;
        let positions = apply_sponsored_items(&base, &state.sponsored);
        let summary = CurveSummary::new(&positions, state.stake, state.persons, state.sponsorship);
        let chart = ChartSeries::from_curve(&positions);

        debug!(
            persons = state.persons,
            total_cost = summary.total_cost,
            total_amount = summary.total_amount,
            "curve computed"
        );

        Ok(CurveReport {
            base,
            positions,
            summary,
            chart,
        })
    }

    /// New state with the anchor under `key` set to `value`.
    pub fn edit(state: &CurveState, key: AnchorKey, value: f64) -> Result<CurveState, CurveError> {
        if !value.is_finite() {
            return Err(CurveError::NonFiniteValue { key, value });
        }
        Ok(CurveState {
            values: state.values.set(key, value),
            ..state.clone()
        })
    }

    /// New state after dragging control point `index` to `value`.
    pub fn drag(state: &CurveState, index: usize, value: f64) -> Result<CurveState, CurveError> {
        let key = drag_target(index, state.persons)?;
        Self::edit(state, key, value)
    }

    /// New state with intermediate anchors respaced evenly.
    pub fn redistribute(state: &CurveState) -> Result<CurveState, CurveError> {
        let values = redistribute_values(&state.values, state.persons)?;
        info!(persons = state.persons, "redistributed anchor values");
        Ok(CurveState {
            values,
            ..state.clone()
        })
    }

    /// New state for a different position count.
    ///
    /// Anchors that become active without a stored value are filled in from
    /// their neighbours; the last value is kept as is.
    pub fn resize(state: &CurveState, persons: u32) -> Result<CurveState, CurveError> {
        if persons == 0 {
            return Err(CurveError::NoPositions);
        }
        info!(from = state.persons, to = persons, "resizing curve");
        Ok(CurveState {
            persons,
            values: fill_missing_anchors(&state.values, persons),
            ..state.clone()
        })
    }

    /// New state with `item` appended to the sponsored list.
    pub fn add_sponsored(state: &CurveState, item: SponsoredItem) -> CurveState {
        let mut next = state.clone();
        next.sponsored.push(item);
        next
    }
}
