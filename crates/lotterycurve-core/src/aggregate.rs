//! Summary figures for a curve.
//!
//! No sign or range validation: negative inputs propagate arithmetically.
//! Sums saturate at the `i64` bounds.

use serde::{Deserialize, Serialize};

use crate::types::PositionEntry;

/// Sum of every entry's cost.
pub fn total_cost(positions: &[PositionEntry]) -> i64 {
    positions
        .iter()
        .fold(0i64, |sum, p| sum.saturating_add(p.cost))
}

/// Money available: `stake * persons + sponsorship`.
pub fn total_amount(stake: i64, persons: u32, sponsorship: i64) -> i64 {
    stake
        .saturating_mul(i64::from(persons))
        .saturating_add(sponsorship)
}

/// Cost, income and the difference between them.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurveSummary {
    /// Sum of all prize costs.
    pub total_cost: i64,
    /// Stakes plus sponsorship.
    pub total_amount: i64,
    /// `total_amount - total_cost`; negative when prizes exceed income.
    pub balance: i64,
}

impl CurveSummary {
    pub fn new(positions: &[PositionEntry], stake: i64, persons: u32, sponsorship: i64) -> Self {
        let total_cost = total_cost(positions);
        let total_amount = total_amount(stake, persons, sponsorship);
        Self {
            total_cost,
            total_amount,
            balance: total_amount.saturating_sub(total_cost),
        }
    }

    /// Whether income covers the prizes.
    pub fn is_covered(&self) -> bool {
        self.balance >= 0
    }
}
