//! Trait interfaces at the edge of the core.
//!
//! - [`CurveStore`] — persistence of [`CurveState`] (lotterycurve-store implements)
//!
//! The core never calls a store itself: callers load state, pass it in, and
//! persist whatever comes back.

use crate::types::CurveState;

/// Versioned key-value persistence for curve state.
///
/// Implementations tag saved state with
/// [`STATE_VERSION`](crate::constants::STATE_VERSION) and must never surface
/// storage failures: they are logged and degrade to "nothing persisted".
pub trait CurveStore: Send + Sync {
    /// Persist `state`, replacing any previous record.
    fn save(&self, state: &CurveState);

    /// The saved state, if present, readable and of the current version.
    ///
    /// Unreadable or outdated records are deleted as a side effect.
    fn load(&self) -> Option<CurveState>;

    /// Remove the saved record.
    fn clear(&self);

    /// The saved state, or [`CurveState::default`] when there is none.
    fn load_or_default(&self) -> CurveState {
        self.load().unwrap_or_default()
    }
}
