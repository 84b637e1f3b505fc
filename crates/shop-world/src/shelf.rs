//! Display shelves — the contended resource of the shop floor.

use shop_core::{Name, Point, Product, ShelfId};

/// A shelf holding at most one product type up to a bounded quantity.
///
/// # The claim flag
///
/// `claimed` is a *cooperative* reservation marker, not a lock.  A shopper
/// observes it `false` during the read phase of a tick and sets it `true`
/// during the apply phase; two shoppers reading in the same tick can both see
/// the shelf unclaimed and both claim it.  There is no ownership token, and
/// release is unconditional — whoever finishes taking resets the flag even if
/// someone else claimed in between.  Stock can still never be over-taken,
/// because [`take`][Shelf::take] re-checks the live quantity on every call.
#[derive(Clone, Debug)]
pub struct Shelf {
    pub id: ShelfId,

    /// Name of the structure asset this shelf was built from.
    pub structure: Name,

    /// The displayed product and its current quantity.
    pub content: Product,

    /// Maximum quantity the shelf can display (from the structure asset).
    pub capacity: u32,

    /// Cooperative exclusivity flag; see the type-level docs.
    pub claimed: bool,

    /// Where the shelf stands, used for nearest-shelf queries.
    pub position: Point,

    /// Where a shopper stands while taking from the shelf.
    pub stand_point: Point,
}

impl Shelf {
    /// `true` if the shelf displays `name` and has at least one unit left.
    pub fn contains(&self, name: &str) -> bool {
        self.content.name == name && self.content.quantity > 0
    }

    /// Take one unit of `name` off the shelf.
    ///
    /// Returns `false` (a no-op) when the name does not match the displayed
    /// product or the shelf is empty; otherwise decrements the quantity by
    /// exactly one and returns `true`.  There is deliberately no batch take —
    /// callers loop one unit per delay tick, which doubles as pacing for
    /// presentation feedback.
    pub fn take(&mut self, name: &str) -> bool {
        if self.content.name != name {
            return false;
        }
        if self.content.quantity == 0 {
            return false;
        }
        self.content.quantity -= 1;
        true
    }

    /// Units that could be added before hitting capacity.
    #[inline]
    pub fn free_space(&self) -> u32 {
        self.capacity - self.content.quantity
    }

    /// Add `quantity` units of the displayed product.
    ///
    /// # Panics
    ///
    /// Debug-asserts that the result stays within capacity — overfilling is a
    /// restocking bug, not a runtime condition.
    pub fn put(&mut self, quantity: u32) {
        debug_assert!(
            self.content.quantity + quantity <= self.capacity,
            "shelf {} overfilled: {} + {} > {}",
            self.id,
            self.content.quantity,
            quantity,
            self.capacity
        );
        self.content.quantity += quantity;
    }
}
