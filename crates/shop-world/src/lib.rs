//! `shop-world` — mutable store state for the shopsim simulation.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`ledger`]   | `StockLedger` — the store's back-stock                   |
//! | [`shelf`]    | `Shelf` — display stock + cooperative claim flag         |
//! | [`register`] | `Register`, `Payment` — checkout queue and payment cursor|
//! | [`events`]   | `StoreEvent` — presentation/audio notification variants  |
//! | [`world`]    | `StoreWorld` — the explicit simulation context object    |
//! | [`builder`]  | `WorldBuilder` — catalog-validated construction          |
//! | [`error`]    | `WorldError`, `WorldResult<T>`                           |
//!
//! # Design notes
//!
//! `StoreWorld` replaces what a game engine would hold in a global singleton:
//! money, the stock ledger, every shelf and register, and the entry/exit
//! points.  It is created once at simulation start, passed by reference
//! (shared during the read phase, exclusive during the apply phase), and
//! dropped at simulation end.
//!
//! Mutations that a UI or audio layer would care about push a [`StoreEvent`]
//! into the world's event buffer; the tick loop drains the buffer once per
//! tick and hands the events to the observer.  The core never waits on a
//! consumer — events are fire-and-forget.

pub mod builder;
pub mod error;
pub mod events;
pub mod ledger;
pub mod register;
pub mod shelf;
pub mod world;


pub use builder::WorldBuilder;
pub use error::{WorldError, WorldResult};
pub use events::StoreEvent;
pub use ledger::StockLedger;
pub use register::{Payment, Register};
pub use shelf::Shelf;
pub use world::StoreWorld;
