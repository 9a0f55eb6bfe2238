//! JSON and CSV point files.
//!
//! # Record shape
//!
//! Both formats carry the fields the points lookup service returns:
//!
//! ```json
//! [
//!   { "name": "Lipton Camera-2", "type": "CCTV", "lat": 30.8600959, "lng": 75.8610409 }
//! ]
//! ```
//!
//! ```csv
//! name,type,lat,lng
//! Lipton Camera-2,CCTV,30.8600959,75.8610409
//! ```
//!
//! `lon`/`longitude` and `latitude` are accepted as aliases.  Records whose
//! coordinates are out of range are skipped with a warning; a missing file or
//! a malformed document is an error.

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use gf_core::{Coordinate, PoiCategory};

use crate::source::PointsSource;
use crate::{PointOfInterest, PointsResult};

// ── Record ────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PointRecord {
    name:  String,
    #[serde(rename = "type", alias = "category", default)]
    kind:  String,
    #[serde(alias = "latitude")]
    lat:   f64,
    #[serde(alias = "lon", alias = "longitude")]
    lng:   f64,
}

impl PointRecord {
    fn into_point(self, index: usize) -> Option<PointOfInterest> {
        match Coordinate::try_new(self.lat, self.lng) {
            Ok(coordinate) => Some(PointOfInterest::new(
                self.name,
                PoiCategory::parse(&self.kind),
                coordinate,
            )),
            Err(e) => {
                warn!(record = index, name = %self.name, error = %e, "skipping point");
                None
            }
        }
    }
}

fn collect_points(records: impl IntoIterator<Item = PointRecord>) -> Vec<PointOfInterest> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(i, r)| r.into_point(i))
        .collect()
}

// ── Readers ───────────────────────────────────────────────────────────────────

/// Parse a JSON array of point records from any `Read` source.
pub fn load_points_json_reader<R: Read>(reader: R) -> PointsResult<Vec<PointOfInterest>> {
    let records: Vec<PointRecord> = serde_json::from_reader(reader)?;
    Ok(collect_points(records))
}

/// Parse `name,type,lat,lng` CSV from any `Read` source.
pub fn load_points_csv_reader<R: Read>(reader: R) -> PointsResult<Vec<PointOfInterest>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let records = csv_reader
        .deserialize::<PointRecord>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(collect_points(records))
}

// ── File sources ──────────────────────────────────────────────────────────────

/// A JSON file in the lookup service's response shape.
#[derive(Debug, Clone)]
pub struct JsonPointsFile {
    pub path: PathBuf,
}

impl JsonPointsFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }
}

impl PointsSource for JsonPointsFile {
    fn fetch(&self) -> PointsResult<Vec<PointOfInterest>> {
        let file = std::fs::File::open(&self.path)?;
        load_points_json_reader(std::io::BufReader::new(file))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// A `name,type,lat,lng` CSV file.
#[derive(Debug, Clone)]
pub struct CsvPointsFile {
    pub path: PathBuf,
}

impl CsvPointsFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }
}

impl PointsSource for CsvPointsFile {
    fn fetch(&self) -> PointsResult<Vec<PointOfInterest>> {
        let file = std::fs::File::open(&self.path)?;
        load_points_csv_reader(file)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
