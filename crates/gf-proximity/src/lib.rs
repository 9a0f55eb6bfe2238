//! `gf-proximity` — which point of interest is the observer near, and how
//! alarming is it?
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`poi`]     | `PointOfInterest`                                                 |
//! | [`alert`]   | `AlertEvent`, `AlertKind`                                         |
//! | [`engine`]  | `ProximityEngine` — nearest in-range point + classification       |
//! | [`source`]  | `PointsSource` trait, `StaticPoints`, `fetch_or_empty`            |
//! | [`loader`]  | JSON and CSV point files                                          |
//! | [`error`]   | `PointsError`, `PointsResult<T>`                                  |
//!
//! # Decision per fix
//!
//! ```text
//! nearest point with distance ≤ radius?
//!   no  → no alert
//!   yes → speed > limit ? SpeedWarning : Proximity
//! ```
//!
//! Ties on distance go to the point listed first.  The engine holds no
//! state; points are read, never mutated.

pub mod alert;
pub mod engine;
pub mod error;
pub mod loader;
pub mod poi;
pub mod source;

#[cfg(test)]
mod tests;

pub use alert::{AlertEvent, AlertKind};
pub use engine::ProximityEngine;
pub use error::{PointsError, PointsResult};
pub use loader::{CsvPointsFile, JsonPointsFile, load_points_csv_reader, load_points_json_reader};
pub use poi::PointOfInterest;
pub use source::{PointsSource, StaticPoints, fetch_or_empty};
