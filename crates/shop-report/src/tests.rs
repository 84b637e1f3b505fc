//! Unit tests for shop-report.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{ShopperSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(agent_id: u32, tick: u64) -> ShopperSnapshotRow {
        ShopperSnapshotRow {
            agent_id,
            tick,
            phase:      "shopping",
            x:          1.5,
            y:          2.0,
            cart_units: 3,
            has_paid:   false,
        }
    }

    fn summary_row(tick: u64) -> TickSummaryRow {
        TickSummaryRow {
            tick,
            elapsed_ms:      tick * 100,
            money:           12.5,
            shoppers_active: 2,
            shoppers_served: 1,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("shopper_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("shopper_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["agent_id", "tick", "phase", "x", "y", "cart_units", "has_paid"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers2,
            ["tick", "elapsed_ms", "money", "shoppers_active", "shoppers_served"]
        );
    }

    #[test]
    fn csv_snapshot_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 5), snap_row(1, 5)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("shopper_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "0");        // agent_id
        assert_eq!(&rows[0][2], "shopping"); // phase
        assert_eq!(&rows[1][0], "1");
    }

    #[test]
    fn csv_tick_summary_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");   // tick
        assert_eq!(&rows[0][1], "300"); // elapsed_ms
        assert_eq!(&rows[0][3], "2");   // shoppers_active
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use shop_core::{RegisterId, SimConfig, Tick};
    use shop_sim::StoreObserver;
    use shop_world::StoreEvent;

    use crate::observer::ReportObserver;
    use crate::writer::OutputWriter;
    use crate::{ReportResult, ShopperSnapshotRow, TickSummaryRow};

    /// Writer that records what it was asked to write.
    #[derive(Default)]
    struct MemoryWriter {
        snapshots: Vec<ShopperSnapshotRow>,
        summaries: Vec<TickSummaryRow>,
        finished:  bool,
    }

    impl OutputWriter for MemoryWriter {
        fn write_snapshots(&mut self, rows: &[ShopperSnapshotRow]) -> ReportResult<()> {
            self.snapshots.extend_from_slice(rows);
            Ok(())
        }
        fn write_tick_summary(&mut self, row: &TickSummaryRow) -> ReportResult<()> {
            self.summaries.push(row.clone());
            Ok(())
        }
        fn finish(&mut self) -> ReportResult<()> {
            self.finished = true;
            Ok(())
        }
    }

    #[test]
    fn served_counts_completed_payments() {
        let config = SimConfig::default();
        let mut obs = ReportObserver::new(MemoryWriter::default(), &config);

        obs.on_event(
            Tick(5),
            &StoreEvent::PaymentCompleted { register: RegisterId(0), total: 4.0 },
        );
        obs.on_event(Tick(6), &StoreEvent::PaymentScan { register: RegisterId(0) });
        obs.on_event(
            Tick(9),
            &StoreEvent::PaymentCompleted { register: RegisterId(0), total: 2.0 },
        );

        assert_eq!(obs.served(), 2);
    }

    #[test]
    fn sim_end_finishes_the_writer() {
        let config = SimConfig::default();
        let mut obs = ReportObserver::new(MemoryWriter::default(), &config);
        obs.on_sim_end(Tick(100));
        assert!(obs.take_error().is_none());
        assert!(obs.into_writer().finished);
    }
}
