//! Speed estimator: turns a fix stream into km/h.

use gf_core::{EARTH_RADIUS_M, Fix, haversine_m};
use tracing::debug;

use crate::EngineState;

/// Conversion factor from metres per second to kilometres per hour.
pub const MS_TO_KMH: f64 = 3.6;

/// Derives an instantaneous speed from each fix and the one before it.
///
/// Holds one unit of state ([`EngineState`]).  If fixes can arrive from more
/// than one thread, the caller must serialize calls to
/// [`update`][Self::update]; the `&mut self` receiver enforces this in safe
/// code.
#[derive(Debug, Clone)]
pub struct SpeedEstimator {
    earth_radius_m: f64,
    state:          EngineState,
}

impl SpeedEstimator {
    /// Create an estimator measuring distances on a sphere of
    /// `earth_radius_m`.
    pub fn new(earth_radius_m: f64) -> Self {
        Self {
            earth_radius_m,
            state: EngineState::new(),
        }
    }

    /// Consume `fix` and return the speed in km/h since the previous fix.
    ///
    /// Returns `0.0` for the first fix and whenever the elapsed time is zero
    /// or negative.  The result is never negative.  `fix` always becomes the
    /// new previous fix.
    ///
    /// Elapsed time is measured in whole milliseconds, so readings closer
    /// together than the [`Timestamp`](gf_core::Timestamp) resolution read
    /// as a zero gap.
    pub fn update(&mut self, fix: Fix) -> f64 {
        let Some(prev) = self.state.replace(fix) else {
            return 0.0;
        };

        let elapsed_secs = fix.timestamp.secs_since(prev.timestamp);
        if elapsed_secs <= 0.0 {
            debug!(
                previous = %prev.timestamp,
                current = %fix.timestamp,
                "non-positive elapsed time between fixes; speed reported as 0"
            );
            return 0.0;
        }

        let distance_m = haversine_m(prev.coordinate, fix.coordinate, self.earth_radius_m);
        let speed_kmh = distance_m / elapsed_secs * MS_TO_KMH;
        if speed_kmh.is_finite() { speed_kmh } else { 0.0 }
    }

    /// Read-only view of the estimator state.
    #[inline]
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    #[inline]
    pub fn previous_fix(&self) -> Option<&Fix> {
        self.state.previous_fix.as_ref()
    }

    #[inline]
    pub fn earth_radius_m(&self) -> f64 {
        self.earth_radius_m
    }

    /// Forget the previous fix, e.g. when a subscription restarts.  The next
    /// update behaves like the first fix of a session.
    pub fn reset(&mut self) {
        self.state = EngineState::new();
    }
}

impl Default for SpeedEstimator {
    fn default() -> Self {
        Self::new(EARTH_RADIUS_M)
    }
}
