//! Shopper timing and movement tunables.

/// How a shopper paces itself.  All delays are in simulated milliseconds and
/// converted to whole ticks (rounding up) at use.
#[derive(Clone, Debug)]
pub struct ShopperConfig {
    /// Generic re-check interval: queue index, `has_paid`, walking guards.
    pub poll_ms: u32,

    /// Delay between successive one-unit takes at a shelf.  Doubles as the
    /// pacing for grab feedback.
    pub take_interval_ms: u32,

    /// Delay between probes for an open register.
    pub register_probe_ms: u32,

    /// Walking speed in metres/second.
    pub walk_speed: f32,
}

impl Default for ShopperConfig {
    fn default() -> Self {
        Self {
            poll_ms:           100,
            take_interval_ms:  1_000,
            register_probe_ms: 250,
            walk_speed:        1.4, // unhurried browsing pace
        }
    }
}
