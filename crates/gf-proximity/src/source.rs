//! Points source trait and degraded loading.
//!
//! # Pluggability
//!
//! The pipeline asks a [`PointsSource`] for the session's points once at
//! start-up.  File-backed sources live in [`crate::loader`]; a REST lookup or
//! database query only needs to implement the trait.

use tracing::{info, warn};

use crate::{PointOfInterest, PointsResult};

/// Read-only lookup returning the current list of points of interest.
pub trait PointsSource {
    /// Fetch every point.  An empty list is a valid answer.
    fn fetch(&self) -> PointsResult<Vec<PointOfInterest>>;

    /// Short label for log lines.
    fn describe(&self) -> String {
        String::from("points source")
    }
}

/// An in-memory point list.
#[derive(Debug, Clone, Default)]
pub struct StaticPoints(pub Vec<PointOfInterest>);

impl PointsSource for StaticPoints {
    fn fetch(&self) -> PointsResult<Vec<PointOfInterest>> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        format!("{} static points", self.0.len())
    }
}

impl<S: PointsSource + ?Sized> PointsSource for &S {
    fn fetch(&self) -> PointsResult<Vec<PointOfInterest>> {
        (**self).fetch()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Fetch from `source`, treating any failure as "zero points".
///
/// With no points the proximity engine never fires, so a broken lookup
/// degrades to silence instead of stopping the session.
pub fn fetch_or_empty(source: &dyn PointsSource) -> Vec<PointOfInterest> {
    match source.fetch() {
        Ok(points) => {
            info!(source = %source.describe(), count = points.len(), "points loaded");
            points
        }
        Err(e) => {
            warn!(source = %source.describe(), error = %e, "points lookup failed; continuing with no points");
            Vec::new()
        }
    }
}
