//! Fixed points the observer is alerted about.

use gf_core::{Coordinate, PoiCategory};

/// A named hazard or landmark.  Loaded once per session and never mutated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct PointOfInterest {
    pub name:       String,
    pub category:   PoiCategory,
    pub coordinate: Coordinate,
}

impl PointOfInterest {
    pub fn new(name: impl Into<String>, category: PoiCategory, coordinate: Coordinate) -> Self {
        Self {
            name: name.into(),
            category,
            coordinate,
        }
    }
}
