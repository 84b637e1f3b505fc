//! Fluent builder for constructing a [`Sim`].

use shop_agent::{ShopperConfig, ShopperStore};
use shop_catalog::Catalog;
use shop_core::{SimConfig, SimRng, Tick};
use shop_motion::MotionEngine;
use shop_world::StoreWorld;

use crate::{Sim, SimError, SimResult, Spawner, WakeQueue};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — tick duration, total ticks, seed, report interval
/// - [`Catalog`] — consumed read-only (payment pricing, restock validation)
/// - [`StoreWorld`] — from [`shop_world::WorldBuilder`]
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                                  |
/// |----------------------|------------------------------------------|
/// | `.shopper_config(c)` | [`ShopperConfig::default`]               |
/// | `.spawn_delay_ms(..)`| 1000..5000 ms between admissions         |
/// | `.scan_delay_ms(..)` | 250..1500 ms between payment scans       |
/// | `.close_at_tick(t)`  | never — the store stays open to the end  |
pub struct SimBuilder {
    config: SimConfig,
    catalog: Catalog,
    world: StoreWorld,
    shopper_config: ShopperConfig,
    spawn_delay_ms: (u32, u32),
    scan_delay_ms: (u32, u32),
    close_at_tick: Option<Tick>,
}

impl SimBuilder {
    pub fn new(config: SimConfig, catalog: Catalog, world: StoreWorld) -> Self {
        Self {
            config,
            catalog,
            world,
            shopper_config: ShopperConfig::default(),
            spawn_delay_ms: (1_000, 5_000),
            scan_delay_ms: (250, 1_500),
            close_at_tick: None,
        }
    }

    /// Override the shopper timing/movement tunables.
    pub fn shopper_config(mut self, config: ShopperConfig) -> Self {
        self.shopper_config = config;
        self
    }

    /// Delay range between shopper admissions, in simulated milliseconds.
    pub fn spawn_delay_ms(mut self, min: u32, max: u32) -> Self {
        self.spawn_delay_ms = (min, max);
        self
    }

    /// Delay range between payment scans, in simulated milliseconds.
    pub fn scan_delay_ms(mut self, min: u32, max: u32) -> Self {
        self.scan_delay_ms = (min, max);
        self
    }

    /// Close the store (stop admitting shoppers) at `tick`.  Shoppers
    /// already inside still run to completion.
    pub fn close_at_tick(mut self, tick: Tick) -> Self {
        self.close_at_tick = Some(tick);
        self
    }

    /// Validate the configuration and assemble a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        if self.config.tick_duration_ms == 0 {
            return Err(SimError::Config("tick_duration_ms must be > 0".into()));
        }
        for (what, (min, max)) in [
            ("spawn_delay_ms", self.spawn_delay_ms),
            ("scan_delay_ms", self.scan_delay_ms),
        ] {
            if min >= max {
                return Err(SimError::Config(format!(
                    "{what} range {min}..{max} is empty"
                )));
            }
        }

        let clock = self.config.make_clock();
        let mut rng = SimRng::new(self.config.seed);
        let spawner = Spawner::new(self.spawn_delay_ms.0, self.spawn_delay_ms.1, &mut rng, &clock);
        let motion = MotionEngine::new(self.config.tick_duration_ms);

        Ok(Sim {
            config: self.config,
            clock,
            catalog: self.catalog,
            world: self.world,
            shoppers: ShopperStore::new(),
            motion,
            wake_queue: WakeQueue::new(),
            spawner,
            shopper_config: self.shopper_config,
            scan_delay_ms: self.scan_delay_ms,
            close_at_tick: self.close_at_tick,
            rng,
        })
    }
}
