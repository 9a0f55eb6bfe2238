//! Engine configuration.
//!
//! Typically loaded from a JSON file by the application crate and passed to
//! [`PipelineBuilder`][crate::PipelineBuilder].  Missing fields take their
//! defaults:
//!
//! ```json
//! { "radius_m": 10.0, "speed_limit_kmh": 20.0, "earth_radius_m": 6371000.0 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use gf_core::EARTH_RADIUS_M;

use crate::{PipelineError, PipelineResult};

/// Geofence radius used when none is configured.
pub const DEFAULT_RADIUS_M: f64 = 10.0;

/// Speed limit near points of interest used when none is configured.
pub const DEFAULT_SPEED_LIMIT_KMH: f64 = 20.0;

/// Parameters of the geofence and speed check.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// A point is "near" when its distance is at most this many metres.
    pub radius_m: f64,

    /// Speeds strictly above this escalate a proximity alert to a speed
    /// warning.
    pub speed_limit_kmh: f64,

    /// Sphere radius for great-circle distances.
    pub earth_radius_m: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            radius_m:        DEFAULT_RADIUS_M,
            speed_limit_kmh: DEFAULT_SPEED_LIMIT_KMH,
            earth_radius_m:  EARTH_RADIUS_M,
        }
    }
}

impl EngineConfig {
    /// Parse a JSON document; absent fields keep their defaults.
    pub fn from_json_str(s: &str) -> PipelineResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read and parse a JSON config file.
    pub fn load_json(path: &Path) -> PipelineResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Reject values the engine cannot work with.
    ///
    /// A zero or negative radius is accepted: it simply matches nothing
    /// except a point at the exact fix coordinate.
    pub fn validate(&self) -> PipelineResult<()> {
        if !self.radius_m.is_finite() {
            return Err(PipelineError::Config(format!(
                "radius_m must be finite, got {}",
                self.radius_m
            )));
        }
        if !self.speed_limit_kmh.is_finite() || self.speed_limit_kmh < 0.0 {
            return Err(PipelineError::Config(format!(
                "speed_limit_kmh must be a finite non-negative number, got {}",
                self.speed_limit_kmh
            )));
        }
        if !self.earth_radius_m.is_finite() || self.earth_radius_m <= 0.0 {
            return Err(PipelineError::Config(format!(
                "earth_radius_m must be a finite positive number, got {}",
                self.earth_radius_m
            )));
        }
        Ok(())
    }
}
