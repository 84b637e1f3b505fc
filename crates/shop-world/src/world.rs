//! `StoreWorld` — the explicit simulation context object.

use shop_catalog::Catalog;
use shop_core::{Name, Point, Product, RegisterId, ShelfId};

use crate::{Register, Shelf, StockLedger, StoreEvent, WorldError, WorldResult};

/// All mutable store state, threaded explicitly through the simulation.
///
/// Created by [`WorldBuilder`][crate::WorldBuilder] at simulation start and
/// dropped at simulation end.  During a tick the world is read-shared while
/// shoppers decide and exclusively borrowed while their intents are applied;
/// nothing else ever holds it.
pub struct StoreWorld {
    /// The store's cash balance.  Incremented by settled payments,
    /// decremented by back-stock purchases.
    pub money: f32,

    /// While `true` the spawner keeps admitting new shoppers.  Closing the
    /// store stops *new* work only — shoppers already inside run their
    /// lifecycle to completion.
    pub open: bool,

    /// Where new shoppers appear.
    pub entry: Point,

    /// Where departing shoppers walk before despawning.
    pub exit: Point,

    /// Back-stock, distinct from shelf-held display stock.
    pub stock: StockLedger,

    pub shelves: Vec<Shelf>,
    pub registers: Vec<Register>,

    /// Buffered notifications, drained once per tick by the simulation loop.
    events: Vec<StoreEvent>,
}

impl StoreWorld {
    pub(crate) fn new(
        money: f32,
        entry: Point,
        exit: Point,
        stock: StockLedger,
        shelves: Vec<Shelf>,
        registers: Vec<Register>,
    ) -> Self {
        Self {
            money,
            open: true,
            entry,
            exit,
            stock,
            shelves,
            registers,
            events: Vec::new(),
        }
    }

    // ── Access ────────────────────────────────────────────────────────────

    #[inline]
    pub fn shelf(&self, id: ShelfId) -> &Shelf {
        &self.shelves[id.index()]
    }

    #[inline]
    pub fn shelf_mut(&mut self, id: ShelfId) -> &mut Shelf {
        &mut self.shelves[id.index()]
    }

    #[inline]
    pub fn register(&self, id: RegisterId) -> &Register {
        &self.registers[id.index()]
    }

    #[inline]
    pub fn register_mut(&mut self, id: RegisterId) -> &mut Register {
        &mut self.registers[id.index()]
    }

    // ── Events ────────────────────────────────────────────────────────────

    /// Buffer a notification for this tick's drain.
    pub fn emit(&mut self, event: StoreEvent) {
        self.events.push(event);
    }

    /// Take all buffered events, leaving the buffer empty.
    pub fn take_events(&mut self) -> Vec<StoreEvent> {
        std::mem::take(&mut self.events)
    }

    // ── Finding ───────────────────────────────────────────────────────────

    /// The nearest unclaimed shelf displaying `name` with stock remaining.
    ///
    /// Shelves are enumerated in id order and compared with strict `<`, so a
    /// distance tie resolves to the lowest id — deterministic within a tick.
    pub fn nearest_free_shelf_with(&self, name: &str, from: Point) -> Option<ShelfId> {
        let mut nearest: Option<(ShelfId, f32)> = None;
        for shelf in &self.shelves {
            if shelf.claimed || !shelf.contains(name) {
                continue;
            }
            let d = from.distance(shelf.position);
            if nearest.is_none_or(|(_, best)| d < best) {
                nearest = Some((shelf.id, d));
            }
        }
        nearest.map(|(id, _)| id)
    }

    /// The nearest open register (full or not — fullness is discovered at
    /// join time, not probe time).
    pub fn nearest_open_register(&self, from: Point) -> Option<RegisterId> {
        let mut nearest: Option<(RegisterId, f32)> = None;
        for register in &self.registers {
            if !register.open {
                continue;
            }
            let d = from.distance(register.position);
            if nearest.is_none_or(|(_, best)| d < best) {
                nearest = Some((register.id, d));
            }
        }
        nearest.map(|(id, _)| id)
    }

    // ── Shelf operations ──────────────────────────────────────────────────

    /// Set the claim flag on `shelf`.  Returns `true` if the shelf was
    /// previously unclaimed — `false` means another shopper raced us here.
    pub fn claim_shelf(&mut self, id: ShelfId) -> bool {
        let shelf = self.shelf_mut(id);
        let was_free = !shelf.claimed;
        shelf.claimed = true;
        was_free
    }

    /// Clear the claim flag unconditionally — there is no ownership token,
    /// so any release resets the shelf regardless of who claimed it.
    pub fn release_shelf(&mut self, id: ShelfId) {
        self.shelf_mut(id).claimed = false;
    }

    /// Take one unit of `name` from `shelf`, raising the stock-changed and
    /// grab events on success.
    pub fn take_from_shelf(&mut self, id: ShelfId, name: &str) -> bool {
        let shelf = &mut self.shelves[id.index()];
        if !shelf.take(name) {
            return false;
        }
        let event = StoreEvent::ShelfStockChanged {
            shelf: id,
            name: shelf.content.name.clone(),
            quantity: shelf.content.quantity,
        };
        self.emit(event);
        self.emit(StoreEvent::ShelfGrab { shelf: id });
        true
    }

    /// Move up to `capacity − current` units of the shelf's product from the
    /// ledger onto the shelf.
    ///
    /// Returns the number of units moved.  0 means the ledger had none — a
    /// signal for the surrounding UI to offer a back-stock purchase, not an
    /// error.
    pub fn restock_shelf(&mut self, id: ShelfId) -> u32 {
        let shelf = &self.shelves[id.index()];
        let name = shelf.content.name.clone();
        let wanted = shelf.free_space();

        let (remaining, moved) = self.stock.remove(name.as_str(), wanted);
        if moved == 0 {
            return 0;
        }
        self.emit(StoreEvent::LedgerStockChanged { name: name.clone(), quantity: remaining });

        let shelf = &mut self.shelves[id.index()];
        shelf.put(moved);
        let quantity = shelf.content.quantity;
        self.emit(StoreEvent::ShelfStockChanged { shelf: id, name, quantity });

        moved
    }

    /// Switch `shelf` to display `new_product`: return its current content to
    /// the ledger, swap the name, then restock from the ledger.
    ///
    /// Returns the units restocked.  Fails if `new_product` is not in the
    /// catalog — a shelf must never display a product no asset describes.
    pub fn change_shelf_product(
        &mut self,
        id: ShelfId,
        new_product: Name,
        catalog: &Catalog,
    ) -> WorldResult<u32> {
        if catalog.product(new_product.as_str()).is_none() {
            return Err(WorldError::UnknownProduct(new_product));
        }

        let shelf = &self.shelves[id.index()];
        let old_name = shelf.content.name.clone();
        let old_quantity = shelf.content.quantity;

        if old_quantity > 0 {
            let total = self.stock.add(old_name.clone(), old_quantity);
            self.emit(StoreEvent::LedgerStockChanged { name: old_name, quantity: total });
        }

        let shelf = &mut self.shelves[id.index()];
        shelf.content = Product { name: new_product.clone(), quantity: 0 };
        self.emit(StoreEvent::ShelfStockChanged { shelf: id, name: new_product, quantity: 0 });

        Ok(self.restock_shelf(id))
    }

    // ── Economy operations ────────────────────────────────────────────────

    /// Buy `order` into the back-stock at catalog purchase prices.
    ///
    /// Succeeds only when the balance strictly exceeds the total cost;
    /// returns `false` (and changes nothing) otherwise.  An order naming a
    /// product the catalog does not carry is rejected loudly.
    pub fn buy_stock(&mut self, order: &[Product], catalog: &Catalog) -> WorldResult<bool> {
        let mut cost = 0.0_f32;
        for item in order {
            let asset = catalog
                .product(item.name.as_str())
                .ok_or_else(|| WorldError::UnknownProduct(item.name.clone()))?;
            cost += asset.price * item.quantity as f32;
        }

        if self.money <= cost {
            return Ok(false);
        }

        for item in order {
            let total = self.stock.add(item.name.clone(), item.quantity);
            self.emit(StoreEvent::LedgerStockChanged { name: item.name.clone(), quantity: total });
        }
        self.money -= cost;
        Ok(true)
    }

    /// Credit a settled payment to the balance.
    #[inline]
    pub fn deposit(&mut self, amount: f32) {
        self.money += amount;
    }

    // ── Registers ─────────────────────────────────────────────────────────

    pub fn set_register_open(&mut self, id: RegisterId, open: bool) {
        self.register_mut(id).open = open;
    }
}
