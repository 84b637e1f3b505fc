//! Read-only simulation state passed to every lifecycle step.

use shop_core::{Point, Tick};
use shop_motion::MotionEngine;
use shop_world::StoreWorld;

use crate::ShopperConfig;

/// A read-only snapshot of the simulation passed to
/// [`lifecycle::step`][crate::lifecycle::step].
///
/// The context is rebuilt each tick and shared by every shopper stepping in
/// that tick, so all of them decide against the same frozen world — shared
/// state only changes afterwards, in the apply phase.
pub struct StoreContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// How many simulated milliseconds one tick represents.
    pub tick_duration_ms: u32,

    /// Read-only view of all store state.
    pub world: &'a StoreWorld,

    /// Read-only view of everyone's walking state.
    pub motion: &'a MotionEngine,

    /// Shared shopper tunables.
    pub config: &'a ShopperConfig,
}

impl<'a> StoreContext<'a> {
    /// The tick `ms` milliseconds from now — at least one tick ahead, so a
    /// wake scheduled through this is never dropped as "already due".
    #[inline]
    pub fn after_ms(&self, ms: u32) -> Tick {
        let ticks = (ms as u64)
            .div_ceil(self.tick_duration_ms as u64)
            .max(1);
        self.tick + ticks
    }

    /// Where `agent` currently stands (interpolated if mid-walk).
    #[inline]
    pub fn position_of(&self, agent: shop_core::AgentId) -> Point {
        self.motion.position(agent, self.tick)
    }
}
