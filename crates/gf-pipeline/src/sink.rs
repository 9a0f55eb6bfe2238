//! Alert sink trait for presentation and data collection.

use gf_core::{Fix, FixRejection, RawFix};
use gf_proximity::AlertEvent;

use crate::PipelineStats;

/// Callbacks invoked by [`Pipeline::run`][crate::Pipeline::run] for every
/// fix.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The sink decides how long an alert is
/// displayed or retained; the pipeline places no constraint on it.
///
/// # Example: console presenter
///
/// ```rust,ignore
/// struct Console;
///
/// impl AlertSink for Console {
///     fn on_alert(&mut self, fix: &Fix, alert: &AlertEvent) {
///         println!("{}: {alert}", fix.timestamp);
///     }
/// }
/// ```
pub trait AlertSink {
    /// Called for every accepted fix, before any alert for it.
    fn on_fix(&mut self, _fix: &Fix, _speed_kmh: f64) {}

    /// Called at most once per accepted fix.
    fn on_alert(&mut self, _fix: &Fix, _alert: &AlertEvent) {}

    /// Called for every reading dropped by validation.
    fn on_rejected(&mut self, _raw: &RawFix, _reason: FixRejection) {}

    /// Called once when the subscription ends.
    fn on_end(&mut self, _stats: &PipelineStats) {}
}

/// An [`AlertSink`] that does nothing.
pub struct NoopSink;

impl AlertSink for NoopSink {}

impl<S: AlertSink + ?Sized> AlertSink for &mut S {
    fn on_fix(&mut self, fix: &Fix, speed_kmh: f64) {
        (**self).on_fix(fix, speed_kmh);
    }

    fn on_alert(&mut self, fix: &Fix, alert: &AlertEvent) {
        (**self).on_alert(fix, alert);
    }

    fn on_rejected(&mut self, raw: &RawFix, reason: FixRejection) {
        (**self).on_rejected(raw, reason);
    }

    fn on_end(&mut self, stats: &PipelineStats) {
        (**self).on_end(stats);
    }
}

/// Fan out to two sinks, first `A` then `B`.
impl<A: AlertSink, B: AlertSink> AlertSink for (A, B) {
    fn on_fix(&mut self, fix: &Fix, speed_kmh: f64) {
        self.0.on_fix(fix, speed_kmh);
        self.1.on_fix(fix, speed_kmh);
    }

    fn on_alert(&mut self, fix: &Fix, alert: &AlertEvent) {
        self.0.on_alert(fix, alert);
        self.1.on_alert(fix, alert);
    }

    fn on_rejected(&mut self, raw: &RawFix, reason: FixRejection) {
        self.0.on_rejected(raw, reason);
        self.1.on_rejected(raw, reason);
    }

    fn on_end(&mut self, stats: &PipelineStats) {
        self.0.on_end(stats);
        self.1.on_end(stats);
    }
}
