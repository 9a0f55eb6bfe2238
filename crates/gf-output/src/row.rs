//! Plain data row types written by output backends.

use gf_core::Fix;
use gf_proximity::{AlertEvent, AlertKind};

/// One alert as recorded by a writer.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertRow {
    pub timestamp_ms:    i64,
    pub kind:            AlertKind,
    pub point_name:      String,
    /// Empty for speed warnings, which do not carry the point category.
    pub point_category:  String,
    pub distance_m:      f64,
    pub speed_kmh:       f64,
    /// `Some` only for speed warnings.
    pub speed_limit_kmh: Option<f64>,
}

impl AlertRow {
    /// Flatten `alert` for the fix it fired on.  `speed_kmh` is the
    /// estimator's reading for that fix.
    pub fn new(fix: &Fix, speed_kmh: f64, alert: &AlertEvent) -> Self {
        let (point_category, speed_limit_kmh) = match alert {
            AlertEvent::Proximity { point_category, .. } => (point_category.to_string(), None),
            AlertEvent::SpeedWarning { speed_limit_kmh, .. } => (String::new(), Some(*speed_limit_kmh)),
        };
        Self {
            timestamp_ms: fix.timestamp.as_millis(),
            kind: alert.kind(),
            point_name: alert.point_name().to_owned(),
            point_category,
            distance_m: alert.distance_m(),
            speed_kmh,
            speed_limit_kmh,
        }
    }
}

/// One accepted fix and its speed estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceRow {
    pub timestamp_ms: i64,
    pub lat:          f64,
    pub lon:          f64,
    pub speed_kmh:    f64,
}

impl TraceRow {
    pub fn new(fix: &Fix, speed_kmh: f64) -> Self {
        Self {
            timestamp_ms: fix.timestamp.as_millis(),
            lat:          fix.coordinate.lat,
            lon:          fix.coordinate.lon,
            speed_kmh,
        }
    }
}
