//! `shop-report` — simulation output writers for the shopsim simulation.
//!
//! A [`ReportObserver`] implements `shop_sim::StoreObserver` and forwards
//! periodic snapshots to an [`OutputWriter`] backend.  One backend ships:
//!
//! | Backend | Files created                                    |
//! |---------|--------------------------------------------------|
//! | CSV     | `shopper_snapshots.csv`, `tick_summaries.csv`    |
//!
//! # Usage
//!
//! ```rust,ignore
//! use shop_report::{CsvWriter, ReportObserver};
//!
//! let writer = CsvWriter::new(Path::new("./out"))?;
//! let mut obs = ReportObserver::new(writer, &config);
//! sim.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("report error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{ReportError, ReportResult};
pub use observer::ReportObserver;
pub use row::{ShopperSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
