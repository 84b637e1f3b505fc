//! `shop-agent` — the autonomous shopper.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`shopper`]   | `Shopper`, `Phase`, `Stage`, `ShopperStore`                  |
//! | [`config`]    | `ShopperConfig` — polling/walking tunables                   |
//! | [`context`]   | `StoreContext<'a>` — read-only tick snapshot                 |
//! | [`intent`]    | `Intent` — the actions a step may request                    |
//! | [`lifecycle`] | `step` — one state-machine step per wake                     |
//!
//! # Design notes
//!
//! The tick loop in shop-sim runs each woken shopper through a two-phase
//! cycle:
//!
//! 1. **Step phase**: [`lifecycle::step`] reads the *frozen* start-of-tick
//!    world through [`StoreContext`], mutates only the shopper's own state
//!    (its phase, wanted list, RNG), and returns a list of [`Intent`]s.
//! 2. **Apply phase** (sequential, in wake order): the intents mutate the
//!    shared world — claim flags, shelf stock, register queues.
//!
//! Because every shopper stepping in the same tick reads the same frozen
//! world, two of them can observe one shelf as unclaimed and both claim it —
//! the cooperative claim flag is deliberately not a lock, and this crate
//! makes no attempt to close that window.  What it does guarantee is that
//! shared state is only written in the apply phase, so each individual
//! mutation (one take, one join) is checked against live state and can fail
//! harmlessly; the shopper observes the outcome at its next wake and adapts.

pub mod config;
pub mod context;
pub mod intent;
pub mod lifecycle;
pub mod shopper;


pub use config::ShopperConfig;
pub use context::StoreContext;
pub use intent::Intent;
pub use shopper::{Phase, Shopper, ShopperStore, Stage};
