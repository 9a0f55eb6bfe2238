//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `alerts.db` file in the configured output directory with
//! two tables: `alerts` and `speed_trace`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::AlertWriter;
use crate::{AlertRow, OutputResult, TraceRow};

/// Writes alerts and the speed trace to an SQLite database.
pub struct SqliteAlertWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteAlertWriter {
    /// Open (or create) `alerts.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("alerts.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS alerts (
                 timestamp_ms    INTEGER NOT NULL,
                 kind            TEXT    NOT NULL,
                 point_name      TEXT    NOT NULL,
                 point_category  TEXT    NOT NULL,
                 distance_m      REAL    NOT NULL,
                 speed_kmh       REAL    NOT NULL,
                 speed_limit_kmh REAL
             );
             CREATE TABLE IF NOT EXISTS speed_trace (
                 timestamp_ms INTEGER NOT NULL,
                 lat          REAL    NOT NULL,
                 lon          REAL    NOT NULL,
                 speed_kmh    REAL    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl AlertWriter for SqliteAlertWriter {
    fn write_alert(&mut self, row: &AlertRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO alerts \
             (timestamp_ms, kind, point_name, point_category, distance_m, speed_kmh, speed_limit_kmh) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            rusqlite::params![
                row.timestamp_ms,
                row.kind.as_str(),
                row.point_name,
                row.point_category,
                row.distance_m,
                row.speed_kmh,
                row.speed_limit_kmh,
            ],
        )?;
        Ok(())
    }

    fn write_trace(&mut self, row: &TraceRow) -> OutputResult<()> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO speed_trace (timestamp_ms, lat, lon, speed_kmh) VALUES (?1, ?2, ?3, ?4)",
        )?;
        stmt.execute(rusqlite::params![row.timestamp_ms, row.lat, row.lon, row.speed_kmh])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
