//! Curve constants. All monetary values are whole currency units.

/// Candidate anchor ranks, ascending.
///
/// An anchor is active for a curve of `n` positions when it is strictly
/// below `n`; the last rank is always an implicit anchor on top of these.
pub const ANCHOR_RANKS: [u32; 6] = [1, 2, 3, 5, 10, 20];

/// Schema version written alongside persisted curve state.
///
/// Records tagged with any other version are discarded on load.
pub const STATE_VERSION: u32 = 2;

/// Storage key (and file stem) under which curve state is persisted.
pub const STATE_KEY: &str = "lotterycurve";

/// Default number of positions for a fresh curve.
pub const DEFAULT_PERSONS: u32 = 29;

/// Default stake paid by each person.
pub const DEFAULT_STAKE: i64 = 100;

/// Default sponsorship added on top of the stakes.
pub const DEFAULT_SPONSORSHIP: i64 = 3_000;

/// Default anchor values for a fresh curve, as `(rank, value)` pairs.
pub const DEFAULT_ANCHOR_VALUES: [(u32, f64); 6] = [
    (1, 500.0),
    (2, 400.0),
    (3, 350.0),
    (5, 250.0),
    (10, 150.0),
    (20, 100.0),
];

/// Default value of the last rank for a fresh curve.
pub const DEFAULT_LAST_VALUE: f64 = 70.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_ranks_strictly_increasing() {
        for pair in ANCHOR_RANKS.windows(2) {
            assert!(pair[0] < pair[1], "anchors not increasing: {pair:?}");
        }
    }

    #[test]
    fn anchor_ranks_start_at_one() {
        assert_eq!(ANCHOR_RANKS[0], 1);
    }

    #[test]
    fn default_values_cover_every_anchor() {
        let ranks: Vec<u32> = DEFAULT_ANCHOR_VALUES.iter().map(|(r, _)| *r).collect();
        assert_eq!(ranks, ANCHOR_RANKS);
    }

    #[test]
    fn default_values_non_increasing() {
        let mut prev = f64::INFINITY;
        for (rank, value) in DEFAULT_ANCHOR_VALUES {
            assert!(value <= prev, "value at rank {rank} exceeds previous");
            prev = value;
        }
        assert!(DEFAULT_LAST_VALUE <= prev);
    }

    #[test]
    fn state_version_is_two() {
        assert_eq!(STATE_VERSION, 2);
    }
}
