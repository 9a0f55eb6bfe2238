//! Fix sources for the replay: a recorded CSV track or a simulated drive.

use std::path::Path;

use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use gf_core::{Coordinate, RawFix};
use gf_proximity::PointOfInterest;

/// Metres per degree of latitude on the mean sphere.
const M_PER_DEG_LAT: f64 = 111_194.926_644_558_73;

/// Seconds between simulated fixes.
const SIM_FIX_INTERVAL_SECS: f64 = 1.0;

/// Unix time the simulated drive starts at.
const SIM_START_SECS: f64 = 1_700_000_000.0;

// ── Recorded track ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct FixRecord {
    lat:            f64,
    lon:            f64,
    timestamp_secs: f64,
}

/// Read `lat,lon,timestamp_secs` rows.  Rows are not validated here; the
/// pipeline drops bad readings itself.
pub fn load_fixes_csv(path: &Path) -> Result<Vec<RawFix>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening fixes file {}", path.display()))?;
    reader
        .deserialize::<FixRecord>()
        .map(|row| -> Result<RawFix> {
            let r = row.with_context(|| format!("parsing {}", path.display()))?;
            Ok(RawFix::new(r.lat, r.lon, r.timestamp_secs))
        })
        .collect()
}

// ── Simulated drive ───────────────────────────────────────────────────────────

/// Parameters of a simulated drive.
pub struct DriveParams {
    pub speed_kmh: f64,
    pub jitter_m:  f64,
    pub seed:      u64,
}

/// Drive through every point in order, starting 150 m south of the first.
///
/// The sensor is imperfect on purpose: every fix is jittered by up to
/// `jitter_m`, about 3 % of fixes repeat the previous timestamp and about 1 %
/// are garbage (NaN latitude).
pub fn simulate_drive(points: &[PointOfInterest], params: &DriveParams) -> Vec<RawFix> {
    let Some(first) = points.first() else {
        return Vec::new();
    };

    let mut waypoints = Vec::with_capacity(points.len() + 2);
    waypoints.push(offset_m(first.coordinate, -150.0, 0.0));
    waypoints.extend(points.iter().map(|p| p.coordinate));
    if let Some(last) = points.last() {
        waypoints.push(offset_m(last.coordinate, 150.0, 0.0));
    }

    let mut rng = SmallRng::seed_from_u64(params.seed);
    let step_m = params.speed_kmh.max(0.1) / 3.6 * SIM_FIX_INTERVAL_SECS;
    let mut t = SIM_START_SECS;
    let mut fixes = Vec::new();

    for leg in waypoints.windows(2) {
        let (from, to) = (leg[0], leg[1]);
        let steps = (from.distance_m(to) / step_m).ceil().max(1.0) as usize;
        for i in 0..steps {
            let f = i as f64 / steps as f64;
            let at = Coordinate::new(
                from.lat + (to.lat - from.lat) * f,
                from.lon + (to.lon - from.lon) * f,
            );
            let jitter = params.jitter_m.max(0.0);
            let noisy = offset_m(
                at,
                rng.gen_range(-1.0f64..=1.0) * jitter,
                rng.gen_range(-1.0f64..=1.0) * jitter,
            );

            let roll: f64 = rng.r#gen();
            let timestamp_secs = if roll < 0.03 && !fixes.is_empty() {
                t - SIM_FIX_INTERVAL_SECS
            } else {
                t
            };
            let lat = if roll > 0.99 { f64::NAN } else { noisy.lat };
            fixes.push(RawFix::new(lat, noisy.lon, timestamp_secs));
            t += SIM_FIX_INTERVAL_SECS;
        }
    }
    fixes
}

/// Shift `c` by `north_m` and `east_m` metres.
fn offset_m(c: Coordinate, north_m: f64, east_m: f64) -> Coordinate {
    let m_per_deg_lon = M_PER_DEG_LAT * c.lat.to_radians().cos().max(1e-6);
    Coordinate::new(c.lat + north_m / M_PER_DEG_LAT, c.lon + east_m / m_per_deg_lon)
}

#[cfg(test)]
mod tests {
    use gf_core::PoiCategory;

    use super::*;

    fn points() -> Vec<PointOfInterest> {
        vec![
            PointOfInterest::new("a", PoiCategory::Camera, Coordinate::new(30.86, 75.86)),
            PointOfInterest::new("b", PoiCategory::SpeedBreaker, Coordinate::new(30.862, 75.861)),
        ]
    }

    fn params(seed: u64) -> DriveParams {
        DriveParams { speed_kmh: 36.0, jitter_m: 2.0, seed }
    }

    #[test]
    fn empty_points_no_drive() {
        assert!(simulate_drive(&[], &params(1)).is_empty());
    }

    #[test]
    fn same_seed_same_drive() {
        let a = simulate_drive(&points(), &params(7));
        let b = simulate_drive(&points(), &params(7));
        assert_eq!(a.len(), b.len());
        assert!(!a.is_empty());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.lon, y.lon);
            assert_eq!(x.timestamp_secs, y.timestamp_secs);
        }
    }

    #[test]
    fn drive_passes_every_point() {
        let fixes = simulate_drive(&points(), &DriveParams { speed_kmh: 18.0, jitter_m: 0.0, ..params(3) });
        for p in points() {
            let closest = fixes
                .iter()
                .filter_map(|f| f.validate().ok())
                .map(|f| f.coordinate.distance_m(p.coordinate))
                .fold(f64::INFINITY, f64::min);
            assert!(closest < 10.0, "{} closest {closest}", p.name);
        }
    }

    #[test]
    fn load_fixes_from_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixes.csv");
        std::fs::write(&path, "lat,lon,timestamp_secs\n30.86,75.86,0\n30.861, 75.86 ,1.5\n").unwrap();
        let fixes = load_fixes_csv(&path).unwrap();
        assert_eq!(fixes, vec![RawFix::new(30.86, 75.86, 0.0), RawFix::new(30.861, 75.86, 1.5)]);
    }
}
