//! Fluent builder for constructing a [`Pipeline`].

use gf_proximity::{PointOfInterest, PointsSource, ProximityEngine, fetch_or_empty};
use gf_speed::SpeedEstimator;

use crate::{EngineConfig, Pipeline, PipelineResult, PipelineStats};

/// Fluent builder for [`Pipeline`].
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                    |
/// |---------------------|--------------------------------------------|
/// | `.points(v)`        | No points (the pipeline never alerts)      |
/// | `.points_from(src)` | Loads from `src`; failure → no points      |
///
/// # Example
///
/// ```rust,ignore
/// let pipeline = PipelineBuilder::new(config)
///     .points_from(&JsonPointsFile::new("points.json"))
///     .build()?;
/// ```
pub struct PipelineBuilder {
    config: EngineConfig,
    points: Vec<PointOfInterest>,
}

impl PipelineBuilder {
    pub fn new(config: EngineConfig) -> Self {
        Self { config, points: Vec::new() }
    }

    /// Use `points` for the whole session.
    pub fn points(mut self, points: Vec<PointOfInterest>) -> Self {
        self.points = points;
        self
    }

    /// Load points from `source`.  A failed lookup is logged and leaves the
    /// session with no points rather than failing the build.
    pub fn points_from(mut self, source: &dyn PointsSource) -> Self {
        self.points = fetch_or_empty(source);
        self
    }

    /// Validate the configuration and return a ready-to-run [`Pipeline`].
    pub fn build(self) -> PipelineResult<Pipeline> {
        self.config.validate()?;
        let radius = self.config.earth_radius_m;
        Ok(Pipeline {
            config:    self.config,
            points:    self.points,
            estimator: SpeedEstimator::new(radius),
            engine:    ProximityEngine::new(radius),
            stats:     PipelineStats::default(),
        })
    }
}
