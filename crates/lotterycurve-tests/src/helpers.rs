//! Shared test helpers for E2E tests.

use lotterycurve_core::{PositionEntry, SparseValues, SponsoredItem};

/// Anchor values with an explicit entry per `(rank, value)` pair.
pub fn values(anchors: &[(u32, f64)], last: f64) -> SparseValues {
    anchors
        .iter()
        .fold(SparseValues::new(last), |v, &(rank, value)| v.with_anchor(rank, value))
}

/// Unsponsored curve with ranks `1..=costs.len()`.
pub fn curve(costs: &[i64]) -> Vec<PositionEntry> {
    costs
        .iter()
        .enumerate()
        .map(|(i, &cost)| PositionEntry::new(i as u32 + 1, cost))
        .collect()
}

/// Sponsored items named `item-0`, `item-1`, ... at the given prices.
pub fn items(prices: &[f64]) -> Vec<SponsoredItem> {
    prices
        .iter()
        .enumerate()
        .map(|(i, &price)| SponsoredItem::new(format!("item-{i}"), price))
        .collect()
}

/// Ranks claimed by sponsored items, ascending.
pub fn sponsored_ranks(positions: &[PositionEntry]) -> Vec<u32> {
    positions
        .iter()
        .filter(|p| p.sponsored)
        .map(|p| p.rank)
        .collect()
}
