//! The `Sim` struct and its tick cycle.

use rustc_hash::FxHashSet;

use shop_agent::{lifecycle, Intent, Phase, Shopper, ShopperConfig, ShopperStore, StoreContext};
use shop_catalog::Catalog;
use shop_core::product::list;
use shop_core::{AgentId, AgentRng, Product, SimClock, SimConfig, SimRng, Tick};
use shop_motion::MotionEngine;
use shop_world::{StoreEvent, StoreWorld};

use crate::{Spawner, StoreObserver, WakeQueue};

/// The main simulation runner.
///
/// Holds all simulation state and drives the tick cycle described in the
/// [crate docs](crate).  Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration (total ticks, seed, tick duration, …).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick.
    pub clock: SimClock,

    /// Asset registry, consumed read-only (payment pricing).
    pub catalog: Catalog,

    /// All shared store state: ledger, shelves, registers, money, events.
    pub world: StoreWorld,

    /// Every shopper ever admitted, indexed by `AgentId`.
    pub shoppers: ShopperStore,

    /// Walking state for every shopper.
    pub motion: MotionEngine,

    /// Sparse tick → agents activation queue.
    pub wake_queue: WakeQueue,

    /// Admits new shoppers while the store is open.
    pub spawner: Spawner,

    /// Shared shopper tunables.
    pub shopper_config: ShopperConfig,

    /// Per-unit payment scan delay range (ms), drawn from `rng`.
    pub(crate) scan_delay_ms: (u32, u32),

    /// When to stop admitting shoppers, if ever.
    pub(crate) close_at_tick: Option<Tick>,

    /// Simulation-level RNG (spawn intervals, scan delays).
    pub rng: SimRng,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`, invoking `observer`
    /// hooks at every tick boundary.
    pub fn run<O: StoreObserver>(&mut self, observer: &mut O) {
        loop {
            let now = self.clock.current_tick;
            if now >= self.config.end_tick() {
                break;
            }
            self.tick_once(now, observer);
        }
        observer.on_sim_end(self.clock.current_tick);
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: StoreObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            let now = self.clock.current_tick;
            self.tick_once(now, observer);
        }
    }

    /// Admit a shopper at the entry right now; it draws its own wanted list
    /// on its first wake.  This is what the spawner calls.
    pub fn spawn_shopper(&mut self, now: Tick) -> AgentId {
        self.admit(now, Vec::new())
    }

    /// Admit a shopper with a preset wanted list — scenario and test setup.
    pub fn spawn_shopper_with_list(&mut self, now: Tick, wanted: Vec<Product>) -> AgentId {
        self.admit(now, wanted)
    }

    // ── One tick ──────────────────────────────────────────────────────────

    fn tick_once<O: StoreObserver>(&mut self, now: Tick, observer: &mut O) {
        observer.on_tick_start(now);

        let woken = self.process_tick(now);

        for event in self.world.take_events() {
            observer.on_event(now, &event);
        }
        observer.on_tick_end(now, woken);

        if self.config.report_interval_ticks > 0
            && now.0.is_multiple_of(self.config.report_interval_ticks)
        {
            observer.on_snapshot(now, &self.world, &self.shoppers, &self.motion);
        }

        self.clock.advance();
    }

    fn process_tick(&mut self, now: Tick) -> usize {
        // ── ① Arrivals ────────────────────────────────────────────────────
        //
        // Agents reaching their destination become stationary; their wake at
        // this tick was queued when the walk began.
        let arrived = self.motion.tick_arrivals(now);
        if !arrived.is_empty() {
            log::trace!("{now}: {} arrival(s)", arrived.len());
        }

        // ── ② Closing time ────────────────────────────────────────────────
        if self.close_at_tick == Some(now) && self.world.open {
            self.world.open = false;
            log::info!("{now}: store closed — in-flight shoppers run to completion");
        }

        // ── ③ Spawner ─────────────────────────────────────────────────────
        if self.world.open && self.spawner.due(now) {
            self.spawn_shopper(now);
            self.spawner.reschedule(now, &mut self.rng, &self.clock);
        }

        // ── ④ Payments ────────────────────────────────────────────────────
        self.advance_payments(now);

        // ── ⑤ Wake ────────────────────────────────────────────────────────
        let woken = self.wake_queue.drain_tick(now);

        // ── ⑥ Step phase (reads the frozen world) ─────────────────────────
        //
        // Explicit field borrows so the borrow checker sees that the frozen
        // context (world, motion) and the mutable shoppers are disjoint.
        let mut batch: Vec<(AgentId, Vec<Intent>)> = Vec::with_capacity(woken.len());
        {
            let world = &self.world;
            let motion = &self.motion;
            let config = &self.shopper_config;
            let shoppers = &mut self.shoppers;

            let ctx = StoreContext {
                tick: now,
                tick_duration_ms: self.config.tick_duration_ms,
                world,
                motion,
                config,
            };

            let mut seen: FxHashSet<AgentId> = FxHashSet::default();
            for agent in woken {
                // An agent can be due twice on one tick (poll + arrival);
                // one lifecycle step per tick is the contract.
                if !seen.insert(agent) {
                    continue;
                }
                let shopper = shoppers.get_mut(agent);
                if shopper.is_done() {
                    continue;
                }
                batch.push((agent, lifecycle::step(shopper, &ctx)));
            }
        }
        let stepped = batch.len();

        // ── ⑦ Apply phase (writes, in wake order) ─────────────────────────
        for (agent, intents) in batch {
            self.apply_intents(agent, intents, now);
        }

        stepped
    }

    // ── Intent application ────────────────────────────────────────────────

    fn apply_intents(&mut self, agent: AgentId, intents: Vec<Intent>, now: Tick) {
        for intent in intents {
            match intent {
                // Ignore wakes that are not in the future: a badly computed
                // wake must not spin the agent within one tick.
                Intent::WakeAt(tick) => {
                    if tick > now {
                        self.wake_queue.push(tick, agent);
                    }
                }

                Intent::WalkTo(dest) => {
                    let arrival =
                        self.motion
                            .begin_walk(agent, dest, now, self.shopper_config.walk_speed);
                    self.wake_queue.push(arrival, agent);
                }

                Intent::ClaimShelf(shelf) => {
                    if !self.world.claim_shelf(shelf) {
                        // The check-then-act window between the step and
                        // apply phases: someone else claimed it this tick.
                        log::debug!("{now}: {agent} claimed contended {shelf}");
                    }
                }

                Intent::ReleaseShelf(shelf) => self.world.release_shelf(shelf),

                Intent::TakeFromShelf { shelf, product } => {
                    if self.world.take_from_shelf(shelf, product.as_str()) {
                        let shopper = self.shoppers.get_mut(agent);
                        let quantity = list::add(&mut shopper.cart, product.clone(), 1);
                        self.world
                            .emit(StoreEvent::CartChanged { agent, name: product, quantity });
                    }
                    // A failed take is silent: the shopper re-reads the shelf
                    // at its next wake and gives up on its own.
                }

                Intent::JoinQueue(register) => {
                    match self.world.register_mut(register).join_queue(agent) {
                        Some(index) => {
                            self.shoppers.get_mut(agent).queue_index = Some(index);
                            self.world.emit(StoreEvent::QueueAdvanced { agent, index });
                        }
                        None => {
                            // Filled between the probe and the join — resume
                            // probing for any open register.
                            log::debug!("{now}: {register} refused {agent} (full)");
                            self.shoppers.get_mut(agent).phase = Phase::RoutingToRegister;
                        }
                    }
                }

                Intent::BeginPayment(register) => {
                    self.world.register_mut(register).begin_payment(agent, now);
                }

                Intent::Despawn => {
                    self.world.emit(StoreEvent::ShopperExited { agent });
                    log::debug!("{now}: {agent} left the store");
                }
            }
        }
    }

    // ── Payment advancement ───────────────────────────────────────────────

    /// Advance every register's payment cursor that is due this tick: scan
    /// one cart unit, or — once every unit is scanned and the final per-unit
    /// delay has elapsed — settle the total, mark the customer paid, and
    /// rebroadcast queue indices.
    fn advance_payments(&mut self, now: Tick) {
        for i in 0..self.world.registers.len() {
            let register_id = self.world.registers[i].id;
            let Some(payment) = self.world.registers[i].payment.clone() else {
                continue;
            };
            if now < payment.next_step {
                continue;
            }

            let cart = &self.shoppers.get(payment.customer).cart;
            if payment.item < cart.len() {
                let item = cart[payment.item].clone();
                // A cart can only hold products a shelf displayed, and a
                // shelf can only display cataloged products — a miss here is
                // a core bug, not a runtime condition.
                let asset = self.catalog.product(item.name.as_str()).unwrap_or_else(|| {
                    panic!("product {:?} is in a cart but not in the catalog", item.name)
                });

                let mut next = payment;
                next.total += asset.sell_price;
                next.unit += 1;
                if next.unit >= item.quantity {
                    next.unit = 0;
                    next.item += 1;
                }
                let delay_ms = self.rng.gen_range(self.scan_delay_ms.0..self.scan_delay_ms.1);
                next.next_step = now + self.clock.ticks_for_ms(delay_ms);

                self.world.registers[i].payment = Some(next);
                self.world.emit(StoreEvent::PaymentScan { register: register_id });
            } else {
                self.world.deposit(payment.total);

                let shopper = self.shoppers.get_mut(payment.customer);
                shopper.has_paid = true;
                shopper.queue_index = None;

                let reassigned = self.world.registers[i].remove_customer(payment.customer);
                self.world.registers[i].payment = None;
                for (queued, index) in reassigned {
                    let other = self.shoppers.get_mut(queued);
                    if other.queue_index != Some(index) {
                        other.queue_index = Some(index);
                        self.world.emit(StoreEvent::QueueAdvanced { agent: queued, index });
                    }
                }

                self.world.emit(StoreEvent::PaymentCompleted {
                    register: register_id,
                    total: payment.total,
                });
                log::debug!(
                    "{now}: {register_id} settled {:.2} for {}",
                    payment.total,
                    payment.customer
                );
            }
        }
    }

    // ── Admission ─────────────────────────────────────────────────────────

    fn admit(&mut self, now: Tick, wanted: Vec<Product>) -> AgentId {
        let id = self.shoppers.next_id();
        debug_assert_eq!(self.motion.len(), id.index(), "motion/shopper stores diverged");

        self.motion.push_agent(self.world.entry, now);
        let rng = AgentRng::new(self.config.seed, id);
        self.shoppers.push(Shopper::with_list(id, rng, wanted));

        // First lifecycle step runs on this very tick.
        self.wake_queue.push(now, id);
        self.world.emit(StoreEvent::ShopperSpawned { agent: id });
        log::debug!("{now}: {id} entered the store");
        id
    }
}
