//! `ReportObserver<W>` — bridges `StoreObserver` to an `OutputWriter`.

use shop_agent::ShopperStore;
use shop_core::product::list;
use shop_core::{SimConfig, Tick};
use shop_motion::MotionEngine;
use shop_sim::StoreObserver;
use shop_world::{StoreEvent, StoreWorld};

use crate::row::{ShopperSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::ReportError;

/// A [`StoreObserver`] that writes tick summaries and shopper snapshots to
/// any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods have
/// no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct ReportObserver<W: OutputWriter> {
    writer:           W,
    tick_duration_ms: u32,
    /// Payments settled since the start of the run.
    served:           u64,
    last_error:       Option<ReportError>,
}

impl<W: OutputWriter> ReportObserver<W> {
    /// Create an observer backed by `writer`, using `config` for time
    /// conversion.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            tick_duration_ms: config.tick_duration_ms,
            served: 0,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<ReportError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Cumulative settled-payment count.
    pub fn served(&self) -> u64 {
        self.served
    }

    fn store_err(&mut self, result: crate::ReportResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> StoreObserver for ReportObserver<W> {
    fn on_event(&mut self, _tick: Tick, event: &StoreEvent) {
        if matches!(event, StoreEvent::PaymentCompleted { .. }) {
            self.served += 1;
        }
    }

    fn on_snapshot(
        &mut self,
        tick: Tick,
        world: &StoreWorld,
        shoppers: &ShopperStore,
        motion: &MotionEngine,
    ) {
        let summary = TickSummaryRow {
            tick:            tick.0,
            elapsed_ms:      tick.0 * self.tick_duration_ms as u64,
            money:           world.money,
            shoppers_active: shoppers.active_count() as u64,
            shoppers_served: self.served,
        };
        let result = self.writer.write_tick_summary(&summary);
        self.store_err(result);

        let rows: Vec<ShopperSnapshotRow> = shoppers
            .iter()
            .filter(|s| !s.is_done())
            .map(|s| {
                let position = motion.position(s.id, tick);
                ShopperSnapshotRow {
                    agent_id:   s.id.0,
                    tick:       tick.0,
                    phase:      s.phase.name(),
                    x:          position.x,
                    y:          position.y,
                    cart_units: list::total_units(&s.cart),
                    has_paid:   s.has_paid,
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
