//! End-to-end test suite for lotterycurve.
//!
//! Drives curve state through the engine and the stores the way an
//! interactive editor would: load, edit, recompute, save, reload.

pub mod helpers;
