//! Estimator state.

use gf_core::Fix;

/// The only mutable state in the engine: the most recent fix.
///
/// Owned exclusively by [`SpeedEstimator`][crate::SpeedEstimator] and
/// replaced once per incoming fix.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EngineState {
    /// `None` until the first fix of a session arrives.
    pub previous_fix: Option<Fix>,
}

impl EngineState {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `fix` and hand back whatever was there before.
    #[inline]
    pub fn replace(&mut self, fix: Fix) -> Option<Fix> {
        self.previous_fix.replace(fix)
    }
}
