//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `alerts.csv`
//! - `speed_trace.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::AlertWriter;
use crate::{AlertRow, OutputResult, TraceRow};

/// Writes alerts and the speed trace to two CSV files.
pub struct CsvAlertWriter {
    alerts:   Writer<File>,
    trace:    Writer<File>,
    finished: bool,
}

impl CsvAlertWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut alerts = Writer::from_path(dir.join("alerts.csv"))?;
        alerts.write_record([
            "timestamp_ms",
            "kind",
            "point_name",
            "point_category",
            "distance_m",
            "speed_kmh",
            "speed_limit_kmh",
        ])?;

        let mut trace = Writer::from_path(dir.join("speed_trace.csv"))?;
        trace.write_record(["timestamp_ms", "lat", "lon", "speed_kmh"])?;

        Ok(Self {
            alerts,
            trace,
            finished: false,
        })
    }
}

impl AlertWriter for CsvAlertWriter {
    fn write_alert(&mut self, row: &AlertRow) -> OutputResult<()> {
        self.alerts.write_record(&[
            row.timestamp_ms.to_string(),
            row.kind.to_string(),
            row.point_name.clone(),
            row.point_category.clone(),
            format!("{:.0}", row.distance_m),
            format!("{:.2}", row.speed_kmh),
            row.speed_limit_kmh.map(|v| format!("{v:.2}")).unwrap_or_default(),
        ])?;
        Ok(())
    }

    fn write_trace(&mut self, row: &TraceRow) -> OutputResult<()> {
        self.trace.write_record(&[
            row.timestamp_ms.to_string(),
            format!("{:.7}", row.lat),
            format!("{:.7}", row.lon),
            format!("{:.2}", row.speed_kmh),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.alerts.flush()?;
        self.trace.flush()?;
        Ok(())
    }
}
