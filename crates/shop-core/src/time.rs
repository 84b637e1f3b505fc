//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  One tick represents
//! `tick_duration_ms` milliseconds of simulated time; the default is 100 ms,
//! which is the polling quantum of the whole simulation — every wait a
//! shopper or register performs is a whole number of ticks, so all delay
//! arithmetic is exact integer math.
//!
//! Wall-clock time is never consulted: the simulation is fully deterministic
//! for a given seed and configuration.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64`: at the default 100 ms resolution a u64 lasts ~58 billion
/// years, so overflow is not a practical concern.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick and converts between ticks and milliseconds.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// How many simulated milliseconds one tick represents.  Default: 100.
    pub tick_duration_ms: u32,
    /// The current tick — advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(tick_duration_ms: u32) -> Self {
        Self { tick_duration_ms, current_tick: Tick::ZERO }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated milliseconds since tick 0.
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.current_tick.0 * self.tick_duration_ms as u64
    }

    /// How many ticks span `ms` milliseconds?  Rounds up, so a wait is never
    /// shortened; any positive delay is at least one tick.
    #[inline]
    pub fn ticks_for_ms(&self, ms: u32) -> u64 {
        (ms as u64).div_ceil(self.tick_duration_ms as u64).max(1)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_ms = self.elapsed_ms();
        let mins = total_ms / 60_000;
        let secs = (total_ms % 60_000) as f32 / 1_000.0;
        write!(f, "{} ({}:{:04.1})", self.current_tick, mins, secs)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Constructed by the application crate and passed to the simulation builder.
/// The same config and seed always produce the same run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Milliseconds per tick.  Must evenly divide the delays used by agents
    /// for the timing to stay exact; 100 ms (the default polling quantum)
    /// satisfies all built-in delays.
    pub tick_duration_ms: u32,

    /// Total ticks to simulate.  At 100 ms/tick, one simulated minute = 600.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Write report output every N ticks.  0 disables snapshots.
    pub report_interval_ticks: u64,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_duration_ms)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_duration_ms:      100,
            total_ticks:           6_000, // ten simulated minutes
            seed:                  0,
            report_interval_ticks: 0,
        }
    }
}
