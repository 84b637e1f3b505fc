//! Store events — the notification boundary toward presentation layers.
//!
//! The core raises an event on every observable mutation (stock counts, queue
//! indices) and on every audio cue (shelf grab, register scan, payment
//! complete).  Events are buffered in [`StoreWorld`][crate::StoreWorld] and
//! drained once per tick by the simulation loop; what a consumer does with
//! them (render a label, play a clip, nothing) is outside the core.

use shop_core::{AgentId, Name, RegisterId, ShelfId};

/// A fire-and-forget notification raised by a store mutation.
#[derive(Clone, Debug, PartialEq)]
pub enum StoreEvent {
    /// The back-stock quantity of `name` changed (0 = entry removed).
    LedgerStockChanged { name: Name, quantity: u32 },

    /// A shelf's displayed quantity changed.
    ShelfStockChanged { shelf: ShelfId, name: Name, quantity: u32 },

    /// A shopper's cart quantity of `name` changed.
    CartChanged { agent: AgentId, name: Name, quantity: u32 },

    /// Audio cue: a unit was grabbed off a shelf.
    ShelfGrab { shelf: ShelfId },

    /// A shopper's queue index was assigned or changed (0 = next to be served).
    QueueAdvanced { agent: AgentId, index: usize },

    /// Audio cue: the register scanned one cart unit.
    PaymentScan { register: RegisterId },

    /// Audio cue + economy: a payment settled for `total`.
    PaymentCompleted { register: RegisterId, total: f32 },

    /// A new shopper entered the store.
    ShopperSpawned { agent: AgentId },

    /// A shopper crossed the exit and left the simulation.
    ShopperExited { agent: AgentId },
}
