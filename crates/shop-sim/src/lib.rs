//! `shop-sim` — tick loop orchestrator for the shopsim simulation.
//!
//! # The tick cycle
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Arrivals — walkers reaching their destination are marked stationary.
//!   ② Closing  — at `close_at_tick` the store stops admitting shoppers.
//!   ③ Spawner  — while the store is open, admit a shopper when one is due.
//!   ④ Payments — each register with a due payment cursor scans one cart
//!                unit (or settles and dequeues its customer).
//!   ⑤ Wake     — drain this tick's agents from the WakeQueue (deduplicated:
//!                a poll wake and an arrival wake can land on the same tick).
//!   ⑥ Step     — run each woken shopper's lifecycle step against the frozen
//!                start-of-tick world; collect intents.
//!   ⑦ Apply    — apply all intents sequentially in wake order:
//!                  WakeAt(t)        → push into wake queue
//!                  WalkTo(p)        → begin walk; push arrival tick
//!                  ClaimShelf(s)    → set claim flag (contention is logged)
//!                  ReleaseShelf(s)  → clear claim flag unconditionally
//!                  TakeFromShelf    → live-checked take into the cart
//!                  JoinQueue(r)     → live-checked join; failure resets the
//!                                     shopper to RoutingToRegister
//!                  BeginPayment(r)  → install the register's payment cursor
//!                  Despawn          → retire the shopper
//!   ⑧ Events   — drain the world's event buffer to the observer.
//! ```
//!
//! Steps ⑥ and ⑦ are the heart of the concurrency model: every shopper
//! stepping in a tick reads the same frozen world, so same-tick check-then-act
//! races (two shoppers claiming one shelf) happen exactly as they would under
//! a frame-interleaved scheduler, while each individual shared-state mutation
//! is still validated against live state when applied.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let mut sim = SimBuilder::new(config, catalog, world).build()?;
//! sim.run(&mut NoopObserver)?;
//! println!("closed with {} in the till", sim.world.money);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod spawner;
pub mod wake;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, StoreObserver};
pub use sim::Sim;
pub use spawner::Spawner;
pub use wake::WakeQueue;
