//! Overlay of sponsored items onto a dense curve.
//!
//! Items are matched in input order. Each applicable item claims the
//! unclaimed rank whose cost is nearest its price; ties go to the lowest
//! rank. A claimed rank is never offered again, so a later item competing
//! for the same rank falls back to its next-nearest one.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::types::{round_value, PositionEntry, SponsoredItem};

/// Return a copy of `positions` with `items` overlaid.
///
/// Inert items (empty name, non-positive price) are skipped. Items left over
/// once every rank is claimed are ignored.
pub fn apply_sponsored_items(
    positions: &[PositionEntry],
    items: &[SponsoredItem],
) -> Vec<PositionEntry> {
    let mut updated = positions.to_vec();
    let mut claimed: HashSet<usize> = HashSet::with_capacity(items.len());

    for item in items {
        if !item.is_applicable() {
            debug!(name = %item.name, price = item.price, "skipping inert sponsored item");
            continue;
        }

        let Some(index) = nearest_unclaimed(&updated, &claimed, item.price) else {
            warn!(name = %item.name, "no unclaimed rank left for sponsored item");
            continue;
        };

        let entry = &mut updated[index];
        debug!(
            name = %item.name,
            rank = entry.rank,
            previous_cost = entry.cost,
            "sponsored item placed"
        );
        entry.cost = round_value(item.price);
        entry.name = item.name.clone();
        entry.sponsored = true;
        claimed.insert(index);
    }

    updated
}

/// Index of the unclaimed entry whose cost is closest to `price`.
///
/// Compares with strict `<`, so the earliest entry wins ties.
fn nearest_unclaimed(
    positions: &[PositionEntry],
    claimed: &HashSet<usize>,
    price: f64,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, entry) in positions.iter().enumerate() {
        if claimed.contains(&index) {
            continue;
        }
        let distance = (entry.cost as f64 - price).abs();
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}
