//! Timed alert display.
//!
//! The engine emits at most one alert per fix, so a vehicle sitting next to a
//! camera produces one alert every fix.  The board collapses that stream:
//! the same (kind, point) pair only refreshes the display timer, and the
//! alert clears itself once `display_secs` pass without a refresh.  Time is
//! whatever the caller says it is (fix timestamps in practice), so the board
//! never reads a wall clock.

use gf_core::{Fix, Timestamp};
use gf_pipeline::{AlertSink, PipelineStats};
use gf_proximity::{AlertEvent, AlertKind};
use tracing::{info, warn};

/// How long an alert stays up without being refreshed.
pub const DEFAULT_DISPLAY_SECS: f64 = 5.0;

#[derive(Debug, Clone)]
struct Displayed {
    alert:      AlertEvent,
    expires_at: Timestamp,
}

/// Shows the latest alert and clears it after a fixed duration.
#[derive(Debug, Clone)]
pub struct AlertBoard {
    display_ms:    i64,
    current:       Option<Displayed>,
    notifications: u64,
    clears:        u64,
}

impl AlertBoard {
    /// Negative or non-finite durations are treated as zero, i.e. an alert
    /// is cleared by the next fix after it.
    pub fn new(display_secs: f64) -> Self {
        let display_ms = if display_secs.is_finite() && display_secs > 0.0 {
            (display_secs * 1_000.0).round() as i64
        } else {
            0
        };
        Self {
            display_ms,
            current: None,
            notifications: 0,
            clears: 0,
        }
    }

    /// Display `alert` from `now`.
    ///
    /// Returns `true` when this is a new notification, `false` when it only
    /// refreshed an alert of the same kind for the same point.
    pub fn show(&mut self, alert: AlertEvent, now: Timestamp) -> bool {
        let expires_at = now.offset_millis(self.display_ms);
        let is_repeat = self
            .current
            .as_ref()
            .is_some_and(|d| same_subject(&d.alert, &alert));

        if !is_repeat {
            self.notifications += 1;
            match alert.kind() {
                AlertKind::SpeedWarning => warn!(%alert, "speed warning shown"),
                AlertKind::Proximity    => info!(%alert, "alert shown"),
            }
        }
        self.current = Some(Displayed { alert, expires_at });
        !is_repeat
    }

    /// The alert on display at `now`, clearing it first if it has expired.
    pub fn current(&mut self, now: Timestamp) -> Option<&AlertEvent> {
        self.expire(now);
        self.current.as_ref().map(|d| &d.alert)
    }

    /// The alert on display, without advancing time.
    pub fn peek(&self) -> Option<&AlertEvent> {
        self.current.as_ref().map(|d| &d.alert)
    }

    /// Remove whatever is displayed.
    pub fn clear(&mut self) {
        if let Some(d) = self.current.take() {
            self.clears += 1;
            info!(point = d.alert.point_name(), "alert cleared");
        }
    }

    /// Distinct alerts shown so far.
    pub fn notifications(&self) -> u64 {
        self.notifications
    }

    /// Alerts removed by expiry or [`clear`][Self::clear].
    pub fn clears(&self) -> u64 {
        self.clears
    }

    fn expire(&mut self, now: Timestamp) {
        if self.current.as_ref().is_some_and(|d| now >= d.expires_at) {
            self.clear();
        }
    }
}

impl Default for AlertBoard {
    fn default() -> Self {
        Self::new(DEFAULT_DISPLAY_SECS)
    }
}

fn same_subject(a: &AlertEvent, b: &AlertEvent) -> bool {
    a.kind() == b.kind() && a.point_name() == b.point_name()
}

impl AlertSink for AlertBoard {
    fn on_fix(&mut self, fix: &Fix, _speed_kmh: f64) {
        self.expire(fix.timestamp);
    }

    fn on_alert(&mut self, fix: &Fix, alert: &AlertEvent) {
        self.show(alert.clone(), fix.timestamp);
    }

    fn on_end(&mut self, _stats: &PipelineStats) {
        self.clear();
    }
}
