//! `AlertLogSink<W>` — bridges `AlertSink` to an `AlertWriter`.

use gf_core::Fix;
use gf_pipeline::{AlertSink, PipelineStats};
use gf_proximity::AlertEvent;

use crate::row::{AlertRow, TraceRow};
use crate::writer::AlertWriter;
use crate::{OutputError, OutputResult};

/// An [`AlertSink`] that records every accepted fix's speed and every alert
/// to any [`AlertWriter`] backend.
///
/// Errors from the writer are stored internally because `AlertSink` methods
/// have no return value.  After the pipeline run returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct AlertLogSink<W: AlertWriter> {
    writer:     W,
    last_speed: f64,
    last_error: Option<OutputError>,
}

impl<W: AlertWriter> AlertLogSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_speed: 0.0,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                tracing::error!(error = %e, "alert log write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: AlertWriter> AlertSink for AlertLogSink<W> {
    fn on_fix(&mut self, fix: &Fix, speed_kmh: f64) {
        self.last_speed = speed_kmh;
        let result = self.writer.write_trace(&TraceRow::new(fix, speed_kmh));
        self.store_err(result);
    }

    fn on_alert(&mut self, fix: &Fix, alert: &AlertEvent) {
        let row = AlertRow::new(fix, self.last_speed, alert);
        let result = self.writer.write_alert(&row);
        self.store_err(result);
    }

    fn on_end(&mut self, _stats: &PipelineStats) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
