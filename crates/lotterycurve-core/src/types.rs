//! Core curve types: anchor values, curve entries, sponsored items.
//!
//! Ranks are 1-based; rank 1 is the most valuable position. Anchor values
//! are kept as `f64` because interpolation works on fractions, while curve
//! costs are whole units.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ANCHOR_VALUES, DEFAULT_LAST_VALUE, DEFAULT_PERSONS, DEFAULT_SPONSORSHIP,
    DEFAULT_STAKE,
};
use crate::error::CurveError;

/// A 1-based position in the payout order.
pub type Rank = u32;

/// Round to the nearest whole unit, ties towards positive infinity.
pub fn round_value(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Addresses one editable anchor value.
///
/// The last rank is addressed by [`AnchorKey::Last`] rather than its
/// numeric rank so that its value survives changes to the position count.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum AnchorKey {
    /// One of the fixed anchor ranks.
    Rank(Rank),
    /// The last rank of the curve.
    Last,
}

impl fmt::Display for AnchorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rank(rank) => write!(f, "rank {rank}"),
            Self::Last => f.write_str("last"),
        }
    }
}

/// User-edited anchor values plus the value of the last rank.
///
/// Entries for ranks that are not active anchors for the current position
/// count are kept but ignored.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct SparseValues {
    /// Values keyed by anchor rank.
    pub anchors: BTreeMap<Rank, f64>,
    /// Value of the last rank.
    pub last: f64,
}

impl SparseValues {
    /// Empty anchor map with the given last-rank value.
    pub fn new(last: f64) -> Self {
        Self {
            anchors: BTreeMap::new(),
            last,
        }
    }

    /// Builder-style insert of an anchor value.
    pub fn with_anchor(mut self, rank: Rank, value: f64) -> Self {
        self.anchors.insert(rank, value);
        self
    }

    /// Look up the value stored under `key`.
    pub fn get(&self, key: AnchorKey) -> Option<f64> {
        match key {
            AnchorKey::Rank(rank) => self.anchors.get(&rank).copied(),
            AnchorKey::Last => Some(self.last),
        }
    }

    /// Copy of these values with `key` set to `value`.
    pub fn set(&self, key: AnchorKey, value: f64) -> Self {
        let mut next = self.clone();
        match key {
            AnchorKey::Rank(rank) => {
                next.anchors.insert(rank, value);
            }
            AnchorKey::Last => next.last = value,
        }
        next
    }

    /// Value of control point `rank` on a curve of `total` positions.
    ///
    /// The final rank resolves to [`last`](Self::last) even if the anchor
    /// map also holds an entry for the same number.
    pub fn resolve(&self, rank: Rank, total: Rank) -> Result<f64, CurveError> {
        let (key, value) = if rank == total {
            (AnchorKey::Last, self.last)
        } else {
            let value = self
                .anchors
                .get(&rank)
                .copied()
                .ok_or(CurveError::MissingAnchor { rank })?;
            (AnchorKey::Rank(rank), value)
        };
        if !value.is_finite() {
            return Err(CurveError::NonFiniteValue { key, value });
        }
        Ok(value)
    }
}

/// One rank of a dense curve.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PositionEntry {
    /// 1-based rank.
    pub rank: Rank,
    /// Cost of the prize at this rank.
    pub cost: i64,
    /// Display name; empty unless a sponsored item claimed this rank.
    #[serde(default)]
    pub name: String,
    /// Whether a sponsored item claimed this rank.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub sponsored: bool,
}

impl PositionEntry {
    /// Unsponsored entry with an empty name.
    pub fn new(rank: Rank, cost: i64) -> Self {
        Self {
            rank,
            cost,
            name: String::new(),
            sponsored: false,
        }
    }
}

/// An externally priced prize to overlay onto the curve.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SponsoredItem {
    /// Display name.
    pub name: String,
    /// Price in whole units. Matching uses it as is; the claimed entry's
    /// cost is the price rounded with [`round_value`].
    pub price: f64,
}

impl SponsoredItem {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Items without a name or with a non-positive price have no effect.
    pub fn is_applicable(&self) -> bool {
        !self.name.is_empty() && self.price.is_finite() && self.price > 0.0
    }
}

/// Everything needed to recompute a curve; the unit that gets persisted.
///
/// Fields absent from a serialized state take their [`Default`] values.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CurveState {
    /// Number of ranked positions.
    pub persons: u32,
    /// Stake paid by each person.
    pub stake: i64,
    /// Sponsorship money added on top of the stakes.
    pub sponsorship: i64,
    /// Anchor values.
    pub values: SparseValues,
    /// Sponsored items, in priority order.
    pub sponsored: Vec<SponsoredItem>,
}

impl Default for CurveState {
    fn default() -> Self {
        let mut values = SparseValues::new(DEFAULT_LAST_VALUE);
        for (rank, value) in DEFAULT_ANCHOR_VALUES {
            values.anchors.insert(rank, value);
        }
        Self {
            persons: DEFAULT_PERSONS,
            stake: DEFAULT_STAKE,
            sponsorship: DEFAULT_SPONSORSHIP,
            values,
            sponsored: Vec::new(),
        }
    }
}
