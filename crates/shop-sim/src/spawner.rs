//! The customer spawner.

use shop_core::{SimClock, SimRng, Tick};

/// Admits a new shopper at the store entry every `min_delay_ms..max_delay_ms`
/// (uniform), while the store is open.
///
/// Closing the store is the simulation's only cancellation primitive: it
/// stops *new* work, and nothing else — shoppers already inside are never
/// force-terminated.
#[derive(Debug)]
pub struct Spawner {
    pub min_delay_ms: u32,
    pub max_delay_ms: u32,
    next_spawn: Tick,
}

impl Spawner {
    /// Create a spawner whose first admission is one full delay after tick 0,
    /// like a door that opens on a quiet street.
    pub fn new(min_delay_ms: u32, max_delay_ms: u32, rng: &mut SimRng, clock: &SimClock) -> Self {
        let mut spawner = Self { min_delay_ms, max_delay_ms, next_spawn: Tick::ZERO };
        spawner.reschedule(Tick::ZERO, rng, clock);
        spawner
    }

    /// `true` when an admission is due at `now`.
    #[inline]
    pub fn due(&self, now: Tick) -> bool {
        now >= self.next_spawn
    }

    /// Draw the next admission delay.
    pub fn reschedule(&mut self, now: Tick, rng: &mut SimRng, clock: &SimClock) {
        let delay_ms = rng.gen_range(self.min_delay_ms..self.max_delay_ms);
        self.next_spawn = now + clock.ticks_for_ms(delay_ms);
    }

    /// The tick of the next scheduled admission.
    #[inline]
    pub fn next_spawn(&self) -> Tick {
        self.next_spawn
    }
}
