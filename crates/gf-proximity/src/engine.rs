//! Nearest in-range point selection and alert classification.

use gf_core::{Coordinate, EARTH_RADIUS_M, Fix, haversine_m};
use tracing::debug;

use crate::{AlertEvent, PointOfInterest};

/// Stateless geofence evaluator.
///
/// The only thing it keeps is the sphere radius used for distances; points,
/// radius, and speed limit are passed per call so the caller owns all
/// configuration.
#[derive(Debug, Clone, Copy)]
pub struct ProximityEngine {
    earth_radius_m: f64,
}

impl ProximityEngine {
    pub fn new(earth_radius_m: f64) -> Self {
        Self { earth_radius_m }
    }

    #[inline]
    pub fn earth_radius_m(&self) -> f64 {
        self.earth_radius_m
    }

    /// Index and (unrounded) distance of the closest point within
    /// `radius_m` of `at`.
    ///
    /// On equal distances the point that appears first in `points` wins.
    /// Returns `None` for an empty slice or when nothing is in range; a
    /// negative or NaN radius matches nothing, a zero radius matches only a
    /// point at exactly `at`.
    pub fn nearest_in_range(
        &self,
        at:       Coordinate,
        points:   &[PointOfInterest],
        radius_m: f64,
    ) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (i, point) in points.iter().enumerate() {
            let d = haversine_m(at, point.coordinate, self.earth_radius_m);
            if d > radius_m || radius_m.is_nan() {
                continue;
            }
            // Strict `<` keeps the earlier point on ties.
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((i, d)),
            }
        }
        best
    }

    /// Classify `fix` against `points`.
    ///
    /// Produces at most one event: [`AlertEvent::SpeedWarning`] when the
    /// nearest in-range point is found and `speed_kmh > speed_limit_kmh`,
    /// otherwise [`AlertEvent::Proximity`] for that point.  No point in
    /// range means no event.
    pub fn evaluate(
        &self,
        fix:             &Fix,
        speed_kmh:       f64,
        points:          &[PointOfInterest],
        radius_m:        f64,
        speed_limit_kmh: f64,
    ) -> Option<AlertEvent> {
        let (index, distance) = self.nearest_in_range(fix.coordinate, points, radius_m)?;
        let point = &points[index];
        let distance_m = distance.round();

        debug!(
            point = %point.name,
            distance_m = distance,
            speed_kmh,
            speed_limit_kmh,
            "point within radius"
        );

        if speed_kmh > speed_limit_kmh {
            Some(AlertEvent::SpeedWarning {
                point_name: point.name.clone(),
                distance_m,
                speed_kmh,
                speed_limit_kmh,
            })
        } else {
            Some(AlertEvent::Proximity {
                point_name:     point.name.clone(),
                point_category: point.category.clone(),
                distance_m,
            })
        }
    }
}

impl Default for ProximityEngine {
    fn default() -> Self {
        Self::new(EARTH_RADIUS_M)
    }
}
