//! Point-of-interest category shared by the engine, loaders, and writers.
//!
//! The set is open: the points lookup service may introduce new `type`
//! strings at any time, and those are carried through as
//! [`PoiCategory::Other`] rather than rejected.

use std::fmt;
use std::str::FromStr;

/// What kind of hazard or landmark a point of interest is.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PoiCategory {
    /// Speed breaker, bump, or other speed hazard.
    SpeedBreaker,
    /// Traffic or CCTV camera.
    Camera,
    /// Any category the engine has no special name for.
    Other(String),
}

impl PoiCategory {
    /// Parse a source `type` field.  Matching ignores case, spaces,
    /// underscores, and hyphens; never fails.
    pub fn parse(s: &str) -> Self {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "speedbreaker" | "speedbump" | "speedhazard" | "hazard" => PoiCategory::SpeedBreaker,
            "cctv" | "camera" | "speedcamera" => PoiCategory::Camera,
            _ => PoiCategory::Other(s.trim().to_owned()),
        }
    }

    /// Label used for CSV/SQLite column values.
    pub fn as_str(&self) -> &str {
        match self {
            PoiCategory::SpeedBreaker => "speed_breaker",
            PoiCategory::Camera       => "camera",
            PoiCategory::Other(s)     => s,
        }
    }
}

impl FromStr for PoiCategory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PoiCategory::parse(s))
    }
}

impl fmt::Display for PoiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
