//! Simulation observer trait for progress reporting and data collection.

use shop_agent::ShopperStore;
use shop_core::Tick;
use shop_motion::MotionEngine;
use shop_world::{StoreEvent, StoreWorld};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick cycle.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Events are fire-and-forget: the core
/// never waits on an observer.
///
/// # Example — a till watcher
///
/// ```rust,ignore
/// struct TillWatcher;
///
/// impl StoreObserver for TillWatcher {
///     fn on_event(&mut self, tick: Tick, event: &StoreEvent) {
///         if let StoreEvent::PaymentCompleted { total, .. } = event {
///             println!("{tick}: charged {total:.2}");
///         }
///     }
/// }
/// ```
pub trait StoreObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per drained store event, in emission order.
    fn on_event(&mut self, _tick: Tick, _event: &StoreEvent) {}

    /// Called at the end of each tick.  `woken` is the number of shoppers
    /// that were stepped this tick.
    fn on_tick_end(&mut self, _tick: Tick, _woken: usize) {}

    /// Called at snapshot intervals (every `config.report_interval_ticks`).
    ///
    /// Provides read-only access to the full simulation state so reporting
    /// layers can record whatever they want without the sim knowing about
    /// any particular output format.
    fn on_snapshot(
        &mut self,
        _tick:     Tick,
        _world:    &StoreWorld,
        _shoppers: &ShopperStore,
        _motion:   &MotionEngine,
    ) {
    }

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`StoreObserver`] that does nothing.  Use when you need to call `run`
/// but don't want callbacks.
pub struct NoopObserver;

impl StoreObserver for NoopObserver {}
