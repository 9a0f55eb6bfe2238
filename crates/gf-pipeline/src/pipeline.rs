//! The `Pipeline` struct and its per-fix loop.

use gf_core::{Fix, FixRejection, RawFix};
use gf_proximity::{AlertEvent, AlertKind, PointOfInterest, ProximityEngine};
use gf_speed::SpeedEstimator;
use tracing::{debug, info};

use crate::{AlertSink, EngineConfig, FixSubscription};

// ── Outcome & stats ───────────────────────────────────────────────────────────

/// What happened to one reading.
#[derive(Debug, Clone, PartialEq)]
pub enum FixOutcome {
    /// Dropped by validation; estimator state is untouched.
    Rejected(FixRejection),
    /// Accepted and evaluated.  `alert` is `None` when no point is in range.
    Evaluated {
        fix:       Fix,
        speed_kmh: f64,
        alert:     Option<AlertEvent>,
    },
}

impl FixOutcome {
    pub fn alert(&self) -> Option<&AlertEvent> {
        match self {
            FixOutcome::Evaluated { alert, .. } => alert.as_ref(),
            FixOutcome::Rejected(_) => None,
        }
    }

    pub fn speed_kmh(&self) -> Option<f64> {
        match self {
            FixOutcome::Evaluated { speed_kmh, .. } => Some(*speed_kmh),
            FixOutcome::Rejected(_) => None,
        }
    }
}

/// Counters accumulated over a pipeline's lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// Every reading handed to the pipeline, accepted or not.
    pub fixes_received:   u64,
    pub fixes_rejected:   u64,
    pub proximity_alerts: u64,
    pub speed_warnings:   u64,
}

impl PipelineStats {
    #[inline]
    pub fn fixes_accepted(&self) -> u64 {
        self.fixes_received - self.fixes_rejected
    }

    #[inline]
    pub fn alerts(&self) -> u64 {
        self.proximity_alerts + self.speed_warnings
    }
}

// ── Pipeline ──────────────────────────────────────────────────────────────────

/// Owns the speed estimator and the session's points, and evaluates one fix
/// at a time.
///
/// Besides the estimator's previous fix, nothing here changes after
/// construction; the points are never mutated.
///
/// Create via [`PipelineBuilder`][crate::PipelineBuilder].
pub struct Pipeline {
    pub(crate) config:    EngineConfig,
    pub(crate) points:    Vec<PointOfInterest>,
    pub(crate) estimator: SpeedEstimator,
    pub(crate) engine:    ProximityEngine,
    pub(crate) stats:     PipelineStats,
}

impl Pipeline {
    // ── Public API ────────────────────────────────────────────────────────

    /// Drain `subscription` until every publisher is dropped, reporting to
    /// `sink`.  Returns the final counters.
    pub fn run<S: AlertSink>(&mut self, subscription: FixSubscription, mut sink: S) -> PipelineStats {
        info!(points = self.points.len(), radius_m = self.config.radius_m,
              speed_limit_kmh = self.config.speed_limit_kmh, "fix subscription started");

        for raw in subscription {
            self.dispatch(raw, &mut sink);
        }

        info!(
            received = self.stats.fixes_received,
            rejected = self.stats.fixes_rejected,
            proximity = self.stats.proximity_alerts,
            speed_warnings = self.stats.speed_warnings,
            "fix subscription ended"
        );
        sink.on_end(&self.stats);
        self.stats
    }

    /// Feed a finite batch of readings (e.g. a recorded track) without a
    /// channel.  Does not call `on_end`.
    pub fn run_batch<S, I>(&mut self, readings: I, mut sink: S)
    where
        S: AlertSink,
        I: IntoIterator<Item = RawFix>,
    {
        for raw in readings {
            self.dispatch(raw, &mut sink);
        }
    }

    /// Validate and evaluate one reading.
    pub fn handle(&mut self, raw: RawFix) -> FixOutcome {
        self.stats.fixes_received += 1;
        match raw.validate() {
            Ok(fix) => self.evaluate(fix),
            Err(reason) => {
                self.stats.fixes_rejected += 1;
                debug!(lat = raw.lat, lon = raw.lon, timestamp_secs = raw.timestamp_secs,
                       %reason, "fix rejected");
                FixOutcome::Rejected(reason)
            }
        }
    }

    /// Evaluate an already validated fix.
    pub fn handle_fix(&mut self, fix: Fix) -> FixOutcome {
        self.stats.fixes_received += 1;
        self.evaluate(fix)
    }

    /// Forget the previous fix so the next one is treated as the first of a
    /// new session.
    pub fn reset_speed(&mut self) {
        self.estimator.reset();
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn points(&self) -> &[PointOfInterest] {
        &self.points
    }

    pub fn stats(&self) -> PipelineStats {
        self.stats
    }

    pub fn estimator(&self) -> &SpeedEstimator {
        &self.estimator
    }

    // ── Core fix processing ───────────────────────────────────────────────

    fn evaluate(&mut self, fix: Fix) -> FixOutcome {
        let speed_kmh = self.estimator.update(fix);
        let alert = self.engine.evaluate(
            &fix,
            speed_kmh,
            &self.points,
            self.config.radius_m,
            self.config.speed_limit_kmh,
        );

        if let Some(a) = &alert {
            match a.kind() {
                AlertKind::Proximity    => self.stats.proximity_alerts += 1,
                AlertKind::SpeedWarning => self.stats.speed_warnings += 1,
            }
            info!(at = %fix.timestamp, kind = %a.kind(), point = a.point_name(),
                  distance_m = a.distance_m(), speed_kmh, "alert");
        }

        FixOutcome::Evaluated { fix, speed_kmh, alert }
    }

    fn dispatch<S: AlertSink>(&mut self, raw: RawFix, sink: &mut S) {
        match self.handle(raw) {
            FixOutcome::Rejected(reason) => sink.on_rejected(&raw, reason),
            FixOutcome::Evaluated { fix, speed_kmh, alert } => {
                sink.on_fix(&fix, speed_kmh);
                if let Some(alert) = alert {
                    sink.on_alert(&fix, &alert);
                }
            }
        }
    }
}
