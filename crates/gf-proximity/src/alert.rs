//! Alert events produced by the proximity engine.

use std::fmt;

use gf_core::PoiCategory;

/// The two mutually exclusive alert classes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum AlertKind {
    /// Within radius of a point, at or under the speed limit.
    Proximity,
    /// Within radius of a point and over the speed limit.
    SpeedWarning,
}

impl AlertKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertKind::Proximity    => "proximity",
            AlertKind::SpeedWarning => "speed_warning",
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One alert for one fix.  Ownership passes to the sink, which decides how
/// long to display or retain it.
///
/// `distance_m` is rounded to whole metres.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum AlertEvent {
    Proximity {
        point_name:     String,
        point_category: PoiCategory,
        distance_m:     f64,
    },
    SpeedWarning {
        point_name:      String,
        distance_m:      f64,
        speed_kmh:       f64,
        speed_limit_kmh: f64,
    },
}

impl AlertEvent {
    #[inline]
    pub fn kind(&self) -> AlertKind {
        match self {
            AlertEvent::Proximity { .. }    => AlertKind::Proximity,
            AlertEvent::SpeedWarning { .. } => AlertKind::SpeedWarning,
        }
    }

    #[inline]
    pub fn point_name(&self) -> &str {
        match self {
            AlertEvent::Proximity { point_name, .. }
            | AlertEvent::SpeedWarning { point_name, .. } => point_name,
        }
    }

    #[inline]
    pub fn distance_m(&self) -> f64 {
        match self {
            AlertEvent::Proximity { distance_m, .. }
            | AlertEvent::SpeedWarning { distance_m, .. } => *distance_m,
        }
    }

    /// `(speed_kmh, speed_limit_kmh)` for speed warnings.
    pub fn speed(&self) -> Option<(f64, f64)> {
        match self {
            AlertEvent::SpeedWarning { speed_kmh, speed_limit_kmh, .. } => {
                Some((*speed_kmh, *speed_limit_kmh))
            }
            AlertEvent::Proximity { .. } => None,
        }
    }
}

impl fmt::Display for AlertEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertEvent::Proximity { point_name, point_category, distance_m } => {
                write!(f, "{point_category} {point_name:?} {distance_m:.0} m ahead")
            }
            AlertEvent::SpeedWarning { point_name, distance_m, speed_kmh, speed_limit_kmh } => {
                write!(
                    f,
                    "slow down: {speed_kmh:.1} km/h over {speed_limit_kmh:.1} km/h limit, \
                     {point_name:?} {distance_m:.0} m ahead"
                )
            }
        }
    }
}
