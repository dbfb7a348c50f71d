//! `pg-output` — frame and penguin output for offline runs.
//!
//! | Backend | Files created                                   |
//! |---------|-------------------------------------------------|
//! | CSV     | `agent_snapshots.csv`, `frame_summaries.csv`    |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SnapshotObserver`], which implements `pg_sim::FrameObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pg_output::{CsvWriter, SnapshotObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SnapshotObserver::new(writer);
//! driver.run_fixed(600, 1000.0 / 60.0, &mut scene, &mut surface, &mut obs);
//! driver.stop(&mut obs);
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SnapshotObserver;
pub use row::{AgentSnapshotRow, FrameSummaryRow};
pub use writer::OutputWriter;
