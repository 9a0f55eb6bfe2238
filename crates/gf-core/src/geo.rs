//! Geographic coordinate type and great-circle distance.
//!
//! `Coordinate` uses `f64` latitude/longitude.  Geofence radii are tens of
//! metres, so single precision (≈1 m at the equator) would eat most of the
//! margin.

use crate::{GfError, GfResult};

/// Mean Earth radius in metres, used when no other radius is configured.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Construct without validation.  Use [`Coordinate::try_new`] for
    /// untrusted input.
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Construct a coordinate, rejecting non-finite or out-of-range values.
    pub fn try_new(lat: f64, lon: f64) -> GfResult<Self> {
        let c = Self { lat, lon };
        if c.is_valid() {
            Ok(c)
        } else {
            Err(GfError::InvalidCoordinate { lat, lon })
        }
    }

    /// `true` if both components are finite and within
    /// lat ∈ [-90, 90], lon ∈ [-180, 180].
    #[inline]
    pub fn is_valid(self) -> bool {
        self.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// Haversine great-circle distance in metres on a sphere of
    /// [`EARTH_RADIUS_M`].
    #[inline]
    pub fn distance_m(self, other: Coordinate) -> f64 {
        haversine_m(self, other, EARTH_RADIUS_M)
    }
}

/// Haversine great-circle distance in metres between `a` and `b` on a sphere
/// of radius `earth_radius_m`.
///
/// Always finite and non-negative for valid coordinates, symmetric in its
/// arguments, and exactly zero for `a == b`.
pub fn haversine_m(a: Coordinate, b: Coordinate, earth_radius_m: f64) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let h = (d_lat * 0.5).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);
    // Rounding can push h a hair outside [0, 1] near antipodes.
    let h = h.clamp(0.0, 1.0);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    earth_radius_m * c
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.7}, {:.7})", self.lat, self.lon)
    }
}
