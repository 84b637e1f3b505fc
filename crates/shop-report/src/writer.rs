//! The `OutputWriter` trait implemented by backend writers.

use crate::{ReportResult, ShopperSnapshotRow, TickSummaryRow};

/// Trait implemented by report backends.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally by [`ReportObserver`][crate::ReportObserver] and
/// retrieved with `take_error` after the run.
pub trait OutputWriter {
    /// Write a batch of shopper snapshots.
    fn write_snapshots(&mut self, rows: &[ShopperSnapshotRow]) -> ReportResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> ReportResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> ReportResult<()>;
}
