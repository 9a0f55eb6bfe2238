//! `gf-output` — what happens to alerts after the engine produces them.
//!
//! Two writer backends are provided, the second behind a Cargo feature:
//!
//! | Feature   | Backend     | Files created                         |
//! |-----------|-------------|---------------------------------------|
//! | *(none)*  | CSV         | `alerts.csv`, `speed_trace.csv`       |
//! | `sqlite`  | SQLite      | `alerts.db`                           |
//!
//! Both implement [`AlertWriter`] and are driven by [`AlertLogSink`], which
//! implements `gf_pipeline::AlertSink`.  [`AlertBoard`] is the presentation
//! side: it shows the latest alert and clears it after a fixed duration.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gf_output::{AlertBoard, AlertLogSink, CsvAlertWriter};
//!
//! let mut log = AlertLogSink::new(CsvAlertWriter::new(Path::new("./out"))?);
//! let mut board = AlertBoard::new(5.0);
//! pipeline.run(subscription, (&mut log, &mut board));
//! if let Some(e) = log.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod presenter;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use crate::csv::CsvAlertWriter;
pub use error::{OutputError, OutputResult};
pub use observer::AlertLogSink;
pub use presenter::{AlertBoard, DEFAULT_DISPLAY_SECS};
pub use row::{AlertRow, TraceRow};
pub use writer::AlertWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteAlertWriter;
