//! # lotterycurve-core
//! Prize curve construction for ranked lottery payouts.
//!
//! A curve is described by a handful of anchor values and expanded to one
//! cost per rank:
//! - **Anchors**: the fixed ranks `[1, 2, 3, 5, 10, 20]` below the position
//!   count, plus the last rank.
//! - **Interpolation**: linear between consecutive anchors, rounded per rank.
//! - **Redistribution**: evenly respaces intermediate anchors between the
//!   first and last values.
//! - **Sponsorship**: externally priced items replace the nearest-cost rank,
//!   one rank per item.
//! - **Aggregation**: total cost, total income and the balance between them.
//!
//! Everything in this crate is a pure function of its inputs. Persistence
//! goes through the [`traits::CurveStore`] port, implemented elsewhere.

pub mod aggregate;
pub mod anchors;
pub mod chart;
pub mod constants;
pub mod engine;
pub mod error;
pub mod interpolate;
pub mod redistribute;
pub mod sponsorship;
pub mod traits;
pub mod types;

pub use aggregate::{total_amount, total_cost, CurveSummary};
pub use anchors::{active_anchors, control_points, drag_target, slider_positions};
pub use chart::ChartSeries;
pub use engine::{CurveEngine, CurveReport};
pub use error::CurveError;
pub use interpolate::calculate_positions;
pub use redistribute::redistribute_values;
pub use sponsorship::apply_sponsored_items;
pub use traits::CurveStore;
pub use types::{AnchorKey, CurveState, PositionEntry, SparseValues, SponsoredItem};
