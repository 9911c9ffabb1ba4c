//! Series handed to a chart renderer.
//!
//! The renderer draws `main` as a line over `labels` and `anchors` as
//! draggable points; drag events come back as indices into
//! [`control_points`](crate::anchors::control_points) and are resolved with
//! [`drag_target`](crate::anchors::drag_target).

use serde::{Deserialize, Serialize};

use crate::anchors::control_points;
use crate::types::{PositionEntry, Rank};

/// Parallel arrays describing one curve for display.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ChartSeries {
    /// Rank of every point.
    pub labels: Vec<Rank>,
    /// Cost of every point.
    pub main: Vec<i64>,
    /// Cost at control-point ranks, `None` elsewhere.
    pub anchors: Vec<Option<i64>>,
}

impl ChartSeries {
    pub fn from_curve(positions: &[PositionEntry]) -> Self {
        let total = positions.len() as Rank;
        let points = control_points(total);

        let labels = positions.iter().map(|p| p.rank).collect();
        let main = positions.iter().map(|p| p.cost).collect();
        let anchors = positions
            .iter()
            .map(|p| points.contains(&p.rank).then_some(p.cost))
            .collect();

        Self {
            labels,
            main,
            anchors,
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve(costs: &[i64]) -> Vec<PositionEntry> {
        costs
            .iter()
            .enumerate()
            .map(|(i, &c)| PositionEntry::new(i as u32 + 1, c))
            .collect()
    }

    #[test]
    fn series_for_seven_positions() {
        let series = ChartSeries::from_curve(&curve(&[500, 400, 300, 250, 200, 150, 100]));
        assert_eq!(series.labels, vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(series.main, vec![500, 400, 300, 250, 200, 150, 100]);
        assert_eq!(
            series.anchors,
            vec![Some(500), Some(400), Some(300), None, Some(200), None, Some(100)]
        );
    }

    #[test]
    fn anchor_count_matches_control_points() {
        let series = ChartSeries::from_curve(&curve(&[10; 29]));
        let marked = series.anchors.iter().filter(|a| a.is_some()).count();
        assert_eq!(marked, control_points(29).len());
        assert_eq!(series.len(), 29);
    }

    #[test]
    fn empty_curve() {
        let series = ChartSeries::from_curve(&[]);
        assert!(series.is_empty());
    }
}
