//! Unit tests for gf-proximity.

use gf_core::{Coordinate, Fix, PoiCategory, Timestamp};

use crate::{AlertEvent, AlertKind, PointOfInterest, ProximityEngine};

// ── Helpers ───────────────────────────────────────────────────────────────────

const BASE: Coordinate = Coordinate { lat: 30.8600959, lon: 75.8610409 };

/// Metres per degree of latitude on the mean sphere.
const M_PER_DEG: f64 = 111_194.926_644_558_73;

fn north_of_base(m: f64) -> Coordinate {
    Coordinate::new(BASE.lat + m / M_PER_DEG, BASE.lon)
}

fn south_of_base(m: f64) -> Coordinate {
    Coordinate::new(BASE.lat - m / M_PER_DEG, BASE.lon)
}

fn poi(name: &str, category: PoiCategory, at: Coordinate) -> PointOfInterest {
    PointOfInterest::new(name, category, at)
}

fn fix_at_base() -> Fix {
    Fix::new(BASE, Timestamp(0))
}

fn engine() -> ProximityEngine {
    ProximityEngine::default()
}

// ── Selection ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod selection {
    use super::*;

    #[test]
    fn empty_points_no_alert() {
        let e = engine();
        assert_eq!(e.evaluate(&fix_at_base(), 0.0, &[], 10.0, 5.0), None);
        assert_eq!(e.evaluate(&fix_at_base(), 99.0, &[], 1_000.0, 5.0), None);
    }

    #[test]
    fn nothing_in_range_no_alert() {
        let points = [poi("far", PoiCategory::Camera, north_of_base(50.0))];
        assert_eq!(engine().evaluate(&fix_at_base(), 0.0, &points, 10.0, 5.0), None);
    }

    #[test]
    fn nearest_of_two_in_range_selected() {
        let points = [
            poi("eight", PoiCategory::Camera, north_of_base(8.0)),
            poi("five", PoiCategory::Camera, south_of_base(5.0)),
        ];
        let alert = engine().evaluate(&fix_at_base(), 0.0, &points, 10.0, 5.0).unwrap();
        assert_eq!(alert.point_name(), "five");
        assert_eq!(alert.distance_m(), 5.0);
    }

    #[test]
    fn out_of_range_points_ignored() {
        let points = [
            poi("outside", PoiCategory::Camera, north_of_base(12.0)),
            poi("inside", PoiCategory::SpeedBreaker, north_of_base(9.0)),
        ];
        let alert = engine().evaluate(&fix_at_base(), 0.0, &points, 10.0, 5.0).unwrap();
        assert_eq!(alert.point_name(), "inside");
    }

    #[test]
    fn equidistant_tie_goes_to_first_listed() {
        let points = [
            poi("first", PoiCategory::Camera, north_of_base(6.0)),
            poi("second", PoiCategory::Camera, north_of_base(6.0)),
        ];
        let (index, _) = engine().nearest_in_range(BASE, &points, 10.0).unwrap();
        assert_eq!(index, 0);

        // Identical coordinates: order alone decides.
        let dup = [
            poi("a", PoiCategory::Camera, north_of_base(3.0)),
            poi("b", PoiCategory::Camera, north_of_base(3.0)),
        ];
        let alert = engine().evaluate(&fix_at_base(), 0.0, &dup, 10.0, 5.0).unwrap();
        assert_eq!(alert.point_name(), "a");

        let reversed = [dup[1].clone(), dup[0].clone()];
        let alert = engine().evaluate(&fix_at_base(), 0.0, &reversed, 10.0, 5.0).unwrap();
        assert_eq!(alert.point_name(), "b");
    }

    #[test]
    fn boundary_is_inclusive() {
        let points = [poi("edge", PoiCategory::Camera, north_of_base(10.0))];
        let (_, d) = engine().nearest_in_range(BASE, &points, 11.0).unwrap();
        // Whatever the exact haversine result, a radius equal to it matches.
        assert!(engine().nearest_in_range(BASE, &points, d).is_some());
        assert!(engine().nearest_in_range(BASE, &points, d - 1e-6).is_none());
    }

    #[test]
    fn zero_radius_matches_only_exact_coordinate() {
        let points = [
            poi("near", PoiCategory::Camera, north_of_base(1.0)),
            poi("here", PoiCategory::Camera, BASE),
        ];
        let alert = engine().evaluate(&fix_at_base(), 0.0, &points, 0.0, 5.0).unwrap();
        assert_eq!(alert.point_name(), "here");
        assert_eq!(alert.distance_m(), 0.0);

        let only_near = [points[0].clone()];
        assert_eq!(engine().evaluate(&fix_at_base(), 0.0, &only_near, 0.0, 5.0), None);
    }

    #[test]
    fn negative_or_nan_radius_matches_nothing() {
        let points = [poi("here", PoiCategory::Camera, BASE)];
        assert_eq!(engine().evaluate(&fix_at_base(), 0.0, &points, -1.0, 5.0), None);
        assert_eq!(engine().evaluate(&fix_at_base(), 0.0, &points, f64::NAN, 5.0), None);
    }

    #[test]
    fn distance_is_rounded() {
        let points = [poi("p", PoiCategory::Camera, north_of_base(7.4))];
        let alert = engine().evaluate(&fix_at_base(), 0.0, &points, 10.0, 5.0).unwrap();
        assert_eq!(alert.distance_m(), 7.0);
    }
}

// ── Classification ────────────────────────────────────────────────────────────

#[cfg(test)]
mod classification {
    use super::*;

    fn one_point() -> Vec<PointOfInterest> {
        vec![poi("bump", PoiCategory::SpeedBreaker, north_of_base(4.0))]
    }

    #[test]
    fn over_limit_is_speed_warning() {
        let alert = engine().evaluate(&fix_at_base(), 12.0, &one_point(), 10.0, 5.0).unwrap();
        assert_eq!(alert.kind(), AlertKind::SpeedWarning);
        assert_eq!(alert.speed(), Some((12.0, 5.0)));
        assert_eq!(
            alert,
            AlertEvent::SpeedWarning {
                point_name:      "bump".into(),
                distance_m:      4.0,
                speed_kmh:       12.0,
                speed_limit_kmh: 5.0,
            }
        );
    }

    #[test]
    fn under_limit_is_proximity() {
        let alert = engine().evaluate(&fix_at_base(), 3.0, &one_point(), 10.0, 5.0).unwrap();
        assert_eq!(alert.kind(), AlertKind::Proximity);
        assert_eq!(alert.speed(), None);
        assert_eq!(
            alert,
            AlertEvent::Proximity {
                point_name:     "bump".into(),
                point_category: PoiCategory::SpeedBreaker,
                distance_m:     4.0,
            }
        );
    }

    #[test]
    fn exactly_at_limit_is_proximity() {
        let alert = engine().evaluate(&fix_at_base(), 5.0, &one_point(), 10.0, 5.0).unwrap();
        assert_eq!(alert.kind(), AlertKind::Proximity);
    }

    #[test]
    fn speeding_far_from_points_is_silent() {
        let points = [poi("far", PoiCategory::Camera, north_of_base(100.0))];
        assert_eq!(engine().evaluate(&fix_at_base(), 80.0, &points, 10.0, 5.0), None);
    }

    #[test]
    fn lipton_camera_scenario() {
        let points = [poi(
            "Lipton Camera-2",
            PoiCategory::parse("CCTV"),
            Coordinate::new(30.8600959, 75.8610409),
        )];
        let fix = Fix::new(Coordinate::new(30.8600959, 75.8610409), Timestamp(0));
        let alert = engine().evaluate(&fix, 0.0, &points, 10.0, 5.0).unwrap();
        assert_eq!(
            alert,
            AlertEvent::Proximity {
                point_name:     "Lipton Camera-2".into(),
                point_category: PoiCategory::Camera,
                distance_m:     0.0,
            }
        );
    }

    #[test]
    fn display_mentions_point() {
        let alert = engine().evaluate(&fix_at_base(), 12.0, &one_point(), 10.0, 5.0).unwrap();
        let text = alert.to_string();
        assert!(text.contains("bump"), "{text}");
        assert!(text.contains("12.0 km/h"), "{text}");
    }
}

// ── Loaders & sources ─────────────────────────────────────────────────────────

#[cfg(test)]
mod loading {
    use std::io::{Cursor, Write};

    use super::*;
    use crate::{
        CsvPointsFile, JsonPointsFile, PointsError, PointsResult, PointsSource, StaticPoints,
        fetch_or_empty, load_points_csv_reader, load_points_json_reader,
    };

    const JSON: &str = r#"[
        { "name": "Lipton Camera-2", "type": "CCTV", "lat": 30.8600959, "lng": 75.8610409 },
        { "name": "Bump near gate", "type": "Speed Breaker", "lat": 30.861, "lng": 75.862 },
        { "name": "Broken record", "type": "CCTV", "lat": 123.0, "lng": 75.0 },
        { "name": "School", "type": "School Zone", "latitude": 30.87, "longitude": 75.87 }
    ]"#;

    const CSV: &str = "\
name,type,lat,lng\n\
Lipton Camera-2,CCTV,30.8600959,75.8610409\n\
Bump near gate, speed breaker ,30.861,75.862\n";

    struct FailingSource;

    impl PointsSource for FailingSource {
        fn fetch(&self) -> PointsResult<Vec<PointOfInterest>> {
            Err(PointsError::Unavailable("lookup service returned 503".into()))
        }
    }

    #[test]
    fn json_records_parsed_and_invalid_skipped() {
        let points = load_points_json_reader(Cursor::new(JSON)).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].name, "Lipton Camera-2");
        assert_eq!(points[0].category, PoiCategory::Camera);
        assert_eq!(points[0].coordinate, Coordinate::new(30.8600959, 75.8610409));
        assert_eq!(points[1].category, PoiCategory::SpeedBreaker);
        assert_eq!(points[2].category, PoiCategory::Other("School Zone".into()));
    }

    #[test]
    fn json_empty_array_is_ok() {
        assert!(load_points_json_reader(Cursor::new("[]")).unwrap().is_empty());
    }

    #[test]
    fn json_malformed_is_error() {
        let err = load_points_json_reader(Cursor::new("{ not json")).unwrap_err();
        assert!(matches!(err, PointsError::Json(_)));
    }

    #[test]
    fn csv_records_parsed() {
        let points = load_points_csv_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].name, "Bump near gate");
        assert_eq!(points[1].category, PoiCategory::SpeedBreaker);
    }

    #[test]
    fn csv_bad_number_is_error() {
        let bad = "name,type,lat,lng\nX,CCTV,north,75.0\n";
        assert!(matches!(
            load_points_csv_reader(Cursor::new(bad)),
            Err(PointsError::Csv(_))
        ));
    }

    #[test]
    fn file_sources_read_from_disk() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("points.json");
        std::fs::File::create(&json_path).unwrap().write_all(JSON.as_bytes()).unwrap();
        assert_eq!(JsonPointsFile::new(&json_path).fetch().unwrap().len(), 3);

        let csv_path = dir.path().join("points.csv");
        std::fs::File::create(&csv_path).unwrap().write_all(CSV.as_bytes()).unwrap();
        assert_eq!(CsvPointsFile::new(&csv_path).fetch().unwrap().len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let source = JsonPointsFile::new("/definitely/not/here/points.json");
        assert!(matches!(source.fetch(), Err(PointsError::Io(_))));
    }

    #[test]
    fn failed_lookup_degrades_to_empty() {
        assert!(fetch_or_empty(&FailingSource).is_empty());
        let missing = CsvPointsFile::new("/definitely/not/here/points.csv");
        assert!(fetch_or_empty(&missing).is_empty());
    }

    #[test]
    fn degraded_points_never_alert() {
        let points = fetch_or_empty(&FailingSource);
        assert_eq!(engine().evaluate(&fix_at_base(), 50.0, &points, 1e6, 5.0), None);
    }

    #[test]
    fn static_points_round_trip() {
        let points = vec![poi("a", PoiCategory::Camera, BASE)];
        let source = StaticPoints(points.clone());
        assert_eq!(fetch_or_empty(&source), points);
        assert_eq!(source.describe(), "1 static points");
    }
}
