//! The shopper lifecycle: one state-machine step per wake.
//!
//! Each wake performs one decision against the frozen tick snapshot and
//! returns the intents to apply.  Transitions the shopper would make without
//! waiting — skipping an unavailable item, falling from "arrived at shelf"
//! straight into the first take, heading for checkout the moment the list is
//! exhausted — chain within a single wake rather than burning a poll delay.
//!
//! Every non-terminal path ends in something that guarantees a future wake:
//! an explicit `WakeAt`, or a `WalkTo` (whose arrival tick the apply phase
//! pushes into the wake queue).  The only path that returns nothing is
//! `Despawn`.

use shop_core::product::list;
use shop_core::{AgentRng, Product};
use shop_world::StockLedger;

use crate::{Intent, Phase, Shopper, Stage, StoreContext};

/// Bounds for list generation: up to this many draws, up to this many units
/// per draw.
const MAX_LIST_DRAWS: u32 = 4;
const MAX_ITEM_QUANTITY: u32 = 4;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Advance `shopper` by one step.
///
/// Reads shared state only through `ctx` (the frozen tick snapshot); mutates
/// only the shopper's own fields; requests all shared-state changes via the
/// returned intents.
pub fn step(shopper: &mut Shopper, ctx: &StoreContext<'_>) -> Vec<Intent> {
    match shopper.phase {
        Phase::GeneratingList => generating(shopper, ctx),
        Phase::Shopping { item, stage } => shopping(shopper, ctx, item, stage),
        Phase::RoutingToRegister => probe_registers(shopper, ctx),
        Phase::Queuing { register, last_index } => queuing(shopper, ctx, register, last_index),
        Phase::Paying { .. } => paying(shopper, ctx),
        Phase::Exiting => exiting(shopper, ctx),
        Phase::Done => Vec::new(),
    }
}

// ── List generation ───────────────────────────────────────────────────────────

/// Draw a wanted list from the products currently in back-stock.
///
/// `min(rand 1..=4, distinct in-stock count)` draws; each picks a uniformly
/// random ledger entry and a quantity in 1..=4.  Repeated picks of the same
/// product merge by summing, so the result is name-unique and its length can
/// be shorter than the number of draws.
pub fn generate_wanted(rng: &mut AgentRng, stock: &StockLedger) -> Vec<Product> {
    let mut wanted = Vec::new();
    let draws = rng
        .gen_range(1..MAX_LIST_DRAWS + 1)
        .min(stock.len() as u32);

    for _ in 0..draws {
        let Some(choice) = rng.choose(stock.products()) else {
            break;
        };
        let name = choice.name.clone();
        list::add(&mut wanted, name, rng.gen_range(1..MAX_ITEM_QUANTITY + 1));
    }
    wanted
}

fn generating(shopper: &mut Shopper, ctx: &StoreContext<'_>) -> Vec<Intent> {
    if shopper.wanted.is_empty() {
        shopper.wanted = generate_wanted(&mut shopper.rng, &ctx.world.stock);
    }
    begin_item(shopper, ctx, 0)
}

// ── Shopping ──────────────────────────────────────────────────────────────────

/// Advance to the first wanted item (starting at `item`) that some unclaimed
/// shelf can satisfy; items with no such shelf are skipped silently, never
/// retried.  Exhausting the list moves on to checkout.
fn begin_item(shopper: &mut Shopper, ctx: &StoreContext<'_>, mut item: usize) -> Vec<Intent> {
    let here = ctx.position_of(shopper.id);

    while item < shopper.wanted.len() {
        let name = shopper.wanted[item].name.clone();
        match ctx.world.nearest_free_shelf_with(name.as_str(), here) {
            Some(shelf_id) => {
                shopper.phase = Phase::Shopping {
                    item,
                    stage: Stage::Heading { shelf: shelf_id },
                };
                let stand = ctx.world.shelf(shelf_id).stand_point;
                return vec![Intent::ClaimShelf(shelf_id), Intent::WalkTo(stand)];
            }
            None => item += 1, // nobody sells it right now — best effort
        }
    }

    begin_checkout(shopper, ctx)
}

fn shopping(
    shopper: &mut Shopper,
    ctx: &StoreContext<'_>,
    item: usize,
    stage: Stage,
) -> Vec<Intent> {
    match stage {
        Stage::Heading { shelf } => {
            if ctx.motion.is_walking(shopper.id) {
                // Spurious wake mid-walk; the arrival wake is still coming.
                return vec![Intent::WakeAt(ctx.after_ms(ctx.config.poll_ms))];
            }
            // Arrived — the first take attempt happens on this same wake.
            shopper.phase = Phase::Shopping { item, stage: Stage::Taking { shelf } };
            take_step(shopper, ctx, item, shelf)
        }
        Stage::Taking { shelf } => take_step(shopper, ctx, item, shelf),
    }
}

/// One take-loop iteration: stop when the wanted quantity is in the cart or
/// the shelf no longer offers the product, otherwise request one more unit.
fn take_step(
    shopper: &mut Shopper,
    ctx: &StoreContext<'_>,
    item: usize,
    shelf: shop_core::ShelfId,
) -> Vec<Intent> {
    let want = shopper.wanted[item].clone();
    let have = list::amount_of(&shopper.cart, want.name.as_str());

    if have >= want.quantity || !ctx.world.shelf(shelf).contains(want.name.as_str()) {
        // Satisfied, or the shelf ran dry / switched product under us.
        // Release unconditionally either way and move on.
        let mut intents = vec![Intent::ReleaseShelf(shelf)];
        intents.extend(begin_item(shopper, ctx, item + 1));
        return intents;
    }

    vec![
        Intent::TakeFromShelf { shelf, product: want.name },
        Intent::WakeAt(ctx.after_ms(ctx.config.take_interval_ms)),
    ]
}

// ── Checkout ──────────────────────────────────────────────────────────────────

/// Leave directly with an empty cart; otherwise start probing for a register.
fn begin_checkout(shopper: &mut Shopper, ctx: &StoreContext<'_>) -> Vec<Intent> {
    if shopper.cart.is_empty() {
        shopper.phase = Phase::Exiting;
        return vec![Intent::WalkTo(ctx.world.exit)];
    }
    shopper.phase = Phase::RoutingToRegister;
    probe_registers(shopper, ctx)
}

/// Liveness probe: look for any open register, without reserving anything.
/// A register observed open may still refuse the join (it filled in the
/// interim) — the apply phase then resets the phase to `RoutingToRegister`
/// and the next wake probes again.  This loop is unbounded by design: a
/// store that never opens a register strands the shopper here.
fn probe_registers(shopper: &mut Shopper, ctx: &StoreContext<'_>) -> Vec<Intent> {
    match ctx.world.nearest_open_register(ctx.position_of(shopper.id)) {
        Some(register) => {
            shopper.phase = Phase::Queuing { register, last_index: None };
            vec![
                Intent::JoinQueue(register),
                Intent::WakeAt(ctx.after_ms(ctx.config.poll_ms)),
            ]
        }
        None => vec![Intent::WakeAt(ctx.after_ms(ctx.config.register_probe_ms))],
    }
}

// ── Queuing & paying ──────────────────────────────────────────────────────────

fn queuing(
    shopper: &mut Shopper,
    ctx: &StoreContext<'_>,
    register: shop_core::RegisterId,
    last_index: Option<usize>,
) -> Vec<Intent> {
    let poll = Intent::WakeAt(ctx.after_ms(ctx.config.poll_ms));

    let Some(index) = shopper.queue_index else {
        // Join still pending application (or just revoked); keep polling.
        return vec![poll];
    };

    if last_index != Some(index) {
        // Our rank changed (or this is the first look) — advance to the
        // matching physical slot.
        shopper.phase = Phase::Queuing { register, last_index: Some(index) };
        let slot = ctx.world.register(register).slot(index);
        return vec![Intent::WalkTo(slot), poll];
    }

    if index == 0 && !ctx.motion.is_walking(shopper.id) {
        // Front of the line, standing at the counter: hand over the cart.
        shopper.phase = Phase::Paying { register };
        return vec![Intent::BeginPayment(register), poll];
    }

    vec![poll]
}

/// The register drives the payment; we only watch our own flag.
fn paying(shopper: &mut Shopper, ctx: &StoreContext<'_>) -> Vec<Intent> {
    if shopper.has_paid {
        shopper.phase = Phase::Exiting;
        return vec![Intent::WalkTo(ctx.world.exit)];
    }
    vec![Intent::WakeAt(ctx.after_ms(ctx.config.poll_ms))]
}

// ── Exiting ───────────────────────────────────────────────────────────────────

fn exiting(shopper: &mut Shopper, ctx: &StoreContext<'_>) -> Vec<Intent> {
    if ctx.motion.is_walking(shopper.id) {
        return vec![Intent::WakeAt(ctx.after_ms(ctx.config.poll_ms))];
    }
    shopper.phase = Phase::Done;
    vec![Intent::Despawn]
}
