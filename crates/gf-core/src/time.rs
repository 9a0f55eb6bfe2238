//! Fix time model.
//!
//! Timestamps are integer milliseconds on whatever monotonic clock the
//! location provider uses (Unix epoch in practice).  Integer storage keeps
//! equality exact, so duplicate timestamps are detected reliably.
//!
//! Resolution is one millisecond.  Two readings less than half a millisecond
//! apart can land on the same `Timestamp`, and the speed estimator then sees
//! no elapsed time and reports 0.

use std::fmt;

/// An instant in milliseconds.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub i64);

impl Timestamp {
    #[inline]
    pub fn from_millis(ms: i64) -> Self {
        Timestamp(ms)
    }

    #[inline]
    pub fn from_secs(secs: i64) -> Self {
        Timestamp(secs.saturating_mul(1_000))
    }

    /// Convert fractional seconds, rounding to the nearest millisecond.
    /// Sub-millisecond differences are lost.
    ///
    /// Returns `None` for NaN or infinite input.
    pub fn from_secs_f64(secs: f64) -> Option<Self> {
        if !secs.is_finite() {
            return None;
        }
        // `as` saturates for values beyond the i64 range.
        Some(Timestamp((secs * 1_000.0).round() as i64))
    }

    #[inline]
    pub fn as_millis(self) -> i64 {
        self.0
    }

    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / 1_000.0
    }

    /// Seconds elapsed from `earlier` to `self`.  Zero or negative when the
    /// timestamps are duplicated or out of order.
    #[inline]
    pub fn secs_since(self, earlier: Timestamp) -> f64 {
        self.0.saturating_sub(earlier.0) as f64 / 1_000.0
    }

    /// Return the instant `ms` milliseconds after `self`.
    #[inline]
    pub fn offset_millis(self, ms: i64) -> Timestamp {
        Timestamp(self.0.saturating_add(ms))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}s", self.as_secs_f64())
    }
}
