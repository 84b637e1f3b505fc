//! The minimart floor plan: a small corner store.
//!
//! ```text
//!   y
//!  12 │        [R0]  [R1]
//!     │         |     |        registers (queues run toward the door)
//!   6 │  [Apples][Milk][Bread][Soap]
//!   4 │  [Apples]                    shelves (stand points one metre south)
//!     │
//!   0 │  entry ●            ● exit
//!     └────────────────────────────── x
//! ```

use anyhow::Result;

use shop_catalog::Catalog;
use shop_core::Point;
use shop_world::{StoreWorld, WorldBuilder};

/// Stand one metre in front of a shelf at `(x, y)`.
fn shelf_at(builder: WorldBuilder, product: &str, quantity: u32, x: f32, y: f32) -> WorldBuilder {
    builder.shelf("Basic shelf", product, quantity, Point::new(x, y), Point::new(x, y - 1.0))
}

/// Three queue slots stretching south from a register at `(x, y)`.
fn register_at(builder: WorldBuilder, x: f32, y: f32, open: bool) -> WorldBuilder {
    let slots = vec![
        Point::new(x, y - 1.0),
        Point::new(x, y - 2.0),
        Point::new(x, y - 3.0),
    ];
    builder.register(Point::new(x, y), slots, open)
}

/// Build the minimart: five stocked shelves, two registers (one open), and a
/// till float of 200.
pub fn build_floor(catalog: &Catalog) -> Result<StoreWorld> {
    let mut builder = WorldBuilder::new()
        .money(200.0)
        .entry(Point::new(2.0, 0.0))
        .exit(Point::new(10.0, 0.0))
        .stock("Apples", 40)
        .stock("Milk", 30)
        .stock("Bread", 30)
        .stock("Soap", 15);

    builder = shelf_at(builder, "Apples", 10, 2.0, 6.0);
    builder = shelf_at(builder, "Apples", 10, 2.0, 4.0);
    builder = shelf_at(builder, "Milk", 10, 5.0, 6.0);
    builder = shelf_at(builder, "Bread", 10, 8.0, 6.0);
    builder = shelf_at(builder, "Soap", 10, 11.0, 6.0);

    builder = register_at(builder, 4.0, 12.0, true);
    builder = register_at(builder, 7.0, 12.0, false); // opens when it gets busy… someday

    Ok(builder.build(catalog)?)
}
