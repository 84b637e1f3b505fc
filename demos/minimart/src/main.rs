//! minimart — a small corner store run end to end.
//!
//! Simulates fifteen minutes of trade at 100 ms ticks: the spawner admits
//! customers, they browse the five shelves, queue at the single open
//! register, pay, and leave.  The store closes at the twelve-minute mark and
//! the remaining customers drain out.  Tick summaries and shopper snapshots
//! land in `./minimart-out` as CSV.

mod floor;

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};

use shop_catalog::{load_products_reader, load_structures_reader, Catalog};
use shop_core::{SimConfig, Tick};
use shop_report::{CsvWriter, ReportObserver};
use shop_sim::SimBuilder;

use floor::build_floor;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:                  u64 = 42;
const TICK_DURATION_MS:      u32 = 100;
const SIM_MINUTES:           u64 = 15;
const CLOSE_AT_MINUTE:       u64 = 12;
const REPORT_INTERVAL_TICKS: u64 = 10; // snapshot once per simulated second

// ── Asset CSV ─────────────────────────────────────────────────────────────────

const PRODUCTS_CSV: &str = "\
name,description,price,sell_price,sell_price_min,sell_price_max,shelf_kinds
Apples,A bag of crisp apples,1.0,2.0,1.5,3.0,basic
Milk,A litre of whole milk,1.5,2.5,2.0,4.0,basic
Bread,A fresh white loaf,0.5,1.0,0.8,1.8,basic
Soap,A bar of plain soap,0.8,1.5,1.0,2.5,basic
";

const STRUCTURES_CSV: &str = "\
name,description,kind,price,max_content
Basic shelf,A simple display shelf,basic,50.0,10
";

fn load_catalog() -> Result<Catalog> {
    let mut builder = Catalog::builder();
    for asset in load_products_reader(Cursor::new(PRODUCTS_CSV))? {
        builder = builder.product(asset);
    }
    for asset in load_structures_reader(Cursor::new(STRUCTURES_CSV))? {
        builder = builder.structure(asset);
    }
    Ok(builder.build()?)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== minimart — shopsim retail simulation ===");

    let ticks_per_minute = 60_000 / TICK_DURATION_MS as u64;
    let config = SimConfig {
        tick_duration_ms:      TICK_DURATION_MS,
        total_ticks:           SIM_MINUTES * ticks_per_minute,
        seed:                  SEED,
        report_interval_ticks: REPORT_INTERVAL_TICKS,
    };

    let catalog = load_catalog().context("load catalog")?;
    let world = build_floor(&catalog).context("build floor")?;
    let opening_money = world.money;
    let opening_stock = world.stock.total_units();

    let out_dir = Path::new("./minimart-out");
    std::fs::create_dir_all(out_dir).context("create output dir")?;
    let writer = CsvWriter::new(out_dir).context("open report files")?;
    let mut observer = ReportObserver::new(writer, &config);

    let mut sim = SimBuilder::new(config, catalog, world)
        .spawn_delay_ms(1_000, 5_000)
        .close_at_tick(Tick(CLOSE_AT_MINUTE * ticks_per_minute))
        .build()?;

    log::info!(
        "opening for {SIM_MINUTES} simulated minutes ({} ticks), closing doors at minute {CLOSE_AT_MINUTE}",
        sim.config.total_ticks
    );
    sim.run(&mut observer);

    if let Some(e) = observer.take_error() {
        eprintln!("report error: {e}");
    }

    // ── Closing summary ───────────────────────────────────────────────────
    println!("clock:            {}", sim.clock);
    println!("customers:        {} admitted", sim.shoppers.len());
    println!("  served:         {}", observer.served());
    println!("  still inside:   {}", sim.shoppers.active_count());
    println!(
        "till:             {:.2} (opened with {:.2})",
        sim.world.money, opening_money
    );
    println!(
        "back-stock units: {} (opened with {})",
        sim.world.stock.total_units(),
        opening_stock
    );
    for shelf in &sim.world.shelves {
        println!(
            "  shelf {}: {:>2}/{} {}",
            shelf.id.0, shelf.content.quantity, shelf.capacity, shelf.content.name
        );
    }
    println!("reports:          {}", out_dir.display());

    Ok(())
}
