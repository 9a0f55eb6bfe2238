//! The `AlertWriter` trait implemented by all backend writers.

use crate::{AlertRow, OutputResult, TraceRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors surface through [`AlertLogSink::take_error`][crate::AlertLogSink::take_error]
/// because sink callbacks cannot return them.
pub trait AlertWriter {
    /// Record one alert.
    fn write_alert(&mut self, row: &AlertRow) -> OutputResult<()>;

    /// Record one accepted fix and its speed.
    fn write_trace(&mut self, row: &TraceRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent: calling it twice is fine.
    fn finish(&mut self) -> OutputResult<()>;
}
