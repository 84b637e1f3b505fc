//! Fluent, catalog-validated construction of a [`StoreWorld`].

use shop_catalog::Catalog;
use shop_core::{Name, Point, Product, RegisterId, ShelfId};

use crate::{Register, Shelf, StockLedger, StoreWorld, WorldError, WorldResult};

struct ShelfSpec {
    structure: Name,
    product: Name,
    quantity: u32,
    position: Point,
    stand_point: Point,
}

struct RegisterSpec {
    position: Point,
    queue_slots: Vec<Point>,
    open: bool,
}

/// Fluent builder for [`StoreWorld`].
///
/// Every shelf and stock entry is validated against the catalog at
/// [`build`](Self::build): unknown names and over-capacity initial stock are
/// construction errors, not runtime conditions.
///
/// # Example
///
/// ```rust,ignore
/// let world = WorldBuilder::new()
///     .entry(Point::new(0.0, 0.0))
///     .exit(Point::new(0.0, 10.0))
///     .money(100.0)
///     .stock("Apples", 20)
///     .shelf("Basic shelf", "Apples", 10, Point::new(5.0, 2.0), Point::new(5.0, 3.0))
///     .register(Point::new(2.0, 8.0), vec![Point::new(2.0, 7.0), Point::new(2.0, 6.0)], true)
///     .build(&catalog)?;
/// ```
pub struct WorldBuilder {
    money: f32,
    entry: Point,
    exit: Point,
    stock: Vec<(Name, u32)>,
    shelves: Vec<ShelfSpec>,
    registers: Vec<RegisterSpec>,
}

impl Default for WorldBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldBuilder {
    pub fn new() -> Self {
        Self {
            money: 0.0,
            entry: Point::default(),
            exit: Point::default(),
            stock: Vec::new(),
            shelves: Vec::new(),
            registers: Vec::new(),
        }
    }

    /// Starting cash balance.
    pub fn money(mut self, money: f32) -> Self {
        self.money = money;
        self
    }

    /// Where new shoppers appear.
    pub fn entry(mut self, entry: Point) -> Self {
        self.entry = entry;
        self
    }

    /// Where departing shoppers walk before despawning.
    pub fn exit(mut self, exit: Point) -> Self {
        self.exit = exit;
        self
    }

    /// Seed the back-stock with `quantity` units of `product`.
    pub fn stock(mut self, product: &str, quantity: u32) -> Self {
        self.stock.push((Name::new(product), quantity));
        self
    }

    /// Place a shelf built from `structure`, displaying `quantity` units of
    /// `product`.  `position` locates the shelf; `stand_point` is where a
    /// shopper stands while taking from it.
    pub fn shelf(
        mut self,
        structure: &str,
        product: &str,
        quantity: u32,
        position: Point,
        stand_point: Point,
    ) -> Self {
        self.shelves.push(ShelfSpec {
            structure: Name::new(structure),
            product: Name::new(product),
            quantity,
            position,
            stand_point,
        });
        self
    }

    /// Place a register with the given waiting slots (slot 0 at the counter).
    pub fn register(mut self, position: Point, queue_slots: Vec<Point>, open: bool) -> Self {
        self.registers.push(RegisterSpec { position, queue_slots, open });
        self
    }

    /// Validate everything against `catalog` and assemble the world.
    pub fn build(self, catalog: &Catalog) -> WorldResult<StoreWorld> {
        let mut ledger = StockLedger::new();
        for (name, quantity) in self.stock {
            if catalog.product(name.as_str()).is_none() {
                return Err(WorldError::UnknownProduct(name));
            }
            ledger.add(name, quantity);
        }

        let mut shelves = Vec::with_capacity(self.shelves.len());
        for (i, spec) in self.shelves.into_iter().enumerate() {
            let id = ShelfId(i as u32);
            let structure = catalog
                .structure(spec.structure.as_str())
                .ok_or_else(|| WorldError::UnknownStructure(spec.structure.clone()))?;
            if catalog.product(spec.product.as_str()).is_none() {
                return Err(WorldError::UnknownProduct(spec.product));
            }
            if spec.quantity > structure.capacity {
                return Err(WorldError::OverCapacity {
                    shelf: id,
                    quantity: spec.quantity,
                    capacity: structure.capacity,
                });
            }
            shelves.push(Shelf {
                id,
                structure: spec.structure,
                content: Product { name: spec.product, quantity: spec.quantity },
                capacity: structure.capacity,
                claimed: false,
                position: spec.position,
                stand_point: spec.stand_point,
            });
        }

        let mut registers = Vec::with_capacity(self.registers.len());
        for (i, spec) in self.registers.into_iter().enumerate() {
            let id = RegisterId(i as u32);
            if spec.queue_slots.is_empty() {
                return Err(WorldError::NoQueueSlots(id));
            }
            registers.push(Register::new(id, spec.position, spec.queue_slots, spec.open));
        }

        Ok(StoreWorld::new(
            self.money,
            self.entry,
            self.exit,
            ledger,
            shelves,
            registers,
        ))
    }
}
