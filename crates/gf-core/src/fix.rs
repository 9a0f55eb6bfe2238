//! Sensor readings and their validation.
//!
//! The location provider delivers [`RawFix`] values at an irregular cadence.
//! Anything with a non-finite or out-of-range component is turned away by
//! [`RawFix::validate`] before it reaches the speed estimator or the
//! proximity engine; only [`Fix`] values flow through the pipeline.

use std::fmt;

use crate::{Coordinate, Timestamp};

/// A single validated, timestamped position reading.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fix {
    pub coordinate: Coordinate,
    pub timestamp:  Timestamp,
}

impl Fix {
    #[inline]
    pub fn new(coordinate: Coordinate, timestamp: Timestamp) -> Self {
        Self { coordinate, timestamp }
    }

    /// Shorthand used heavily in tests and demos.
    #[inline]
    pub fn at(lat: f64, lon: f64, timestamp_ms: i64) -> Self {
        Self::new(Coordinate::new(lat, lon), Timestamp(timestamp_ms))
    }
}

/// An unvalidated reading exactly as the sensor reported it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawFix {
    pub lat:            f64,
    pub lon:            f64,
    pub timestamp_secs: f64,
}

/// Why a [`RawFix`] was dropped.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FixRejection {
    /// Latitude or longitude is NaN or infinite.
    NonFiniteCoordinate,
    /// Latitude outside [-90, 90] or longitude outside [-180, 180].
    CoordinateOutOfRange,
    /// Timestamp is NaN or infinite.
    NonFiniteTimestamp,
}

impl FixRejection {
    pub fn as_str(self) -> &'static str {
        match self {
            FixRejection::NonFiniteCoordinate  => "non_finite_coordinate",
            FixRejection::CoordinateOutOfRange => "coordinate_out_of_range",
            FixRejection::NonFiniteTimestamp   => "non_finite_timestamp",
        }
    }
}

impl fmt::Display for FixRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl RawFix {
    #[inline]
    pub fn new(lat: f64, lon: f64, timestamp_secs: f64) -> Self {
        Self { lat, lon, timestamp_secs }
    }

    /// Check every component and produce a [`Fix`].
    ///
    /// Coordinate problems are reported before timestamp problems.
    pub fn validate(self) -> Result<Fix, FixRejection> {
        let coordinate = Coordinate::new(self.lat, self.lon);
        if !coordinate.is_finite() {
            return Err(FixRejection::NonFiniteCoordinate);
        }
        if !coordinate.is_valid() {
            return Err(FixRejection::CoordinateOutOfRange);
        }
        let timestamp = Timestamp::from_secs_f64(self.timestamp_secs)
            .ok_or(FixRejection::NonFiniteTimestamp)?;
        Ok(Fix { coordinate, timestamp })
    }
}

impl From<Fix> for RawFix {
    fn from(fix: Fix) -> Self {
        RawFix {
            lat:            fix.coordinate.lat,
            lon:            fix.coordinate.lon,
            timestamp_secs: fix.timestamp.as_secs_f64(),
        }
    }
}
