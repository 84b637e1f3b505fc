//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `shopper_snapshots.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{ReportResult, ShopperSnapshotRow, TickSummaryRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> ReportResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("shopper_snapshots.csv"))?;
        snapshots.write_record(["agent_id", "tick", "phase", "x", "y", "cart_units", "has_paid"])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record([
            "tick",
            "elapsed_ms",
            "money",
            "shoppers_active",
            "shoppers_served",
        ])?;

        Ok(Self { snapshots, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[ShopperSnapshotRow]) -> ReportResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.agent_id.to_string(),
                row.tick.to_string(),
                row.phase.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.cart_units.to_string(),
                (row.has_paid as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> ReportResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.elapsed_ms.to_string(),
            row.money.to_string(),
            row.shoppers_active.to_string(),
            row.shoppers_served.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
