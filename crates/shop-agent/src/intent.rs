//! Shopper intents — the actions a lifecycle step may request.

use shop_core::{Name, Point, RegisterId, ShelfId, Tick};

/// An action a shopper wants performed against shared state.
///
/// Intents are produced by [`lifecycle::step`][crate::lifecycle::step] and
/// consumed by the simulation loop's apply phase.  An intent is a *request*:
/// `TakeFromShelf` and `JoinQueue` are checked against live state when
/// applied and may quietly fail — the shopper discovers the outcome at its
/// next wake and adapts, which is the whole polling discipline.
#[derive(Clone, Debug, PartialEq)]
pub enum Intent {
    /// Wake me again at `tick` (ignored if not in the future).
    WakeAt(Tick),

    /// Walk me toward `dest`; wake me when I arrive.
    WalkTo(Point),

    /// Set the shelf's cooperative claim flag.
    ClaimShelf(ShelfId),

    /// Clear the shelf's claim flag — unconditional, no ownership check.
    ReleaseShelf(ShelfId),

    /// Try to move one unit of `product` from the shelf into my cart.
    TakeFromShelf { shelf: ShelfId, product: Name },

    /// Try to join the register's queue.
    JoinQueue(RegisterId),

    /// Ask the register to start charging me for my cart.
    BeginPayment(RegisterId),

    /// Remove me from the simulation.
    Despawn,
}
