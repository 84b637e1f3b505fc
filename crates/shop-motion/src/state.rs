//! Per-agent walking state.

use shop_core::{Point, Tick};

/// The walking state for a single agent.
///
/// An agent is either **stationary** (`walking = false`, at `to`) or
/// **walking** from `from` to `to`, arriving at `arrival_tick`.  Under the
/// teleport-at-arrival model the agent's logical position while walking is
/// the interpolation between the two endpoints; the arrival decision itself
/// happens in whole ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkState {
    /// `true` while the agent is travelling toward `to`.
    pub walking: bool,

    /// Departure point (or current standing point if `!walking`).
    pub from: Point,

    /// Destination point.  Equals `from` when the agent has never moved.
    pub to: Point,

    /// Tick at which the walk began.  Equals `arrival_tick` when stationary.
    pub departure_tick: Tick,

    /// Tick at which the agent reaches `to`.
    pub arrival_tick: Tick,
}

impl WalkState {
    /// Construct a stationary state at `point` at time `tick`.
    #[inline]
    pub fn stationary(point: Point, tick: Tick) -> Self {
        Self {
            walking:        false,
            from:           point,
            to:             point,
            departure_tick: tick,
            arrival_tick:   tick,
        }
    }

    /// Fraction of the walk completed at `now`, in `[0.0, 1.0]`.
    ///
    /// Returns `1.0` for stationary agents or once `now >= arrival_tick`.
    pub fn progress(&self, now: Tick) -> f32 {
        if !self.walking || self.arrival_tick <= self.departure_tick {
            return 1.0;
        }
        let elapsed = now.0.saturating_sub(self.departure_tick.0) as f32;
        let total   = (self.arrival_tick.0 - self.departure_tick.0) as f32;
        (elapsed / total).min(1.0)
    }

    /// Interpolated position at `now`.
    pub fn position(&self, now: Tick) -> Point {
        if !self.walking {
            return self.to;
        }
        self.from.lerp(self.to, self.progress(now))
    }
}
