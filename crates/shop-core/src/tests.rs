//! Unit tests for shop-core.

use crate::product::list;
use crate::{AgentId, AgentRng, Name, Point, Product, SimClock, SimConfig, Tick};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn pantry() -> Vec<Product> {
    vec![Product::new("Apples", 3), Product::new("Milk", 2)]
}

// ── Product lists ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod product_list {
    use super::*;

    #[test]
    fn add_merges_existing_entry() {
        let mut l = pantry();
        let total = list::add(&mut l, Name::new("Apples"), 2);
        assert_eq!(total, 5);
        assert_eq!(l.len(), 2); // no duplicate entry created
        assert_eq!(list::amount_of(&l, "Apples"), 5);
    }

    #[test]
    fn add_appends_new_entry_in_order() {
        let mut l = pantry();
        list::add(&mut l, Name::new("Bread"), 1);
        assert_eq!(l[2].name, "Bread");
        assert_eq!(l[2].quantity, 1);
    }

    #[test]
    fn remove_partial_leaves_remainder() {
        let mut l = pantry();
        let (remaining, removed) = list::remove(&mut l, "Apples", 2);
        assert_eq!((remaining, removed), (1, 2));
        assert_eq!(list::amount_of(&l, "Apples"), 1);
    }

    #[test]
    fn remove_depleting_drops_the_entry() {
        let mut l = pantry();
        let (remaining, removed) = list::remove(&mut l, "Milk", 5);
        // Only 2 were held; the entry disappears entirely.
        assert_eq!((remaining, removed), (0, 2));
        assert_eq!(list::find(&l, "Milk"), None);
        assert_eq!(l.len(), 1);
    }

    #[test]
    fn remove_absent_name_is_noop() {
        let mut l = pantry();
        assert_eq!(list::remove(&mut l, "Caviar", 1), (0, 0));
        assert_eq!(l.len(), 2);
    }

    #[test]
    fn total_units_sums_quantities() {
        assert_eq!(list::total_units(&pantry()), 5);
        assert_eq!(list::total_units(&[]), 0);
    }
}

// ── Names ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod names {
    use super::*;

    #[test]
    fn clones_compare_equal() {
        let a = Name::new("Apples");
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(a, "Apples");
    }

    #[test]
    fn borrows_as_str_for_lookup() {
        use std::collections::HashMap;
        let mut map: HashMap<Name, u32> = HashMap::new();
        map.insert(Name::new("Milk"), 7);
        assert_eq!(map.get("Milk"), Some(&7));
    }
}

// ── Clock ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod clock {
    use super::*;

    #[test]
    fn ticks_for_ms_rounds_up() {
        let clock = SimClock::new(100);
        assert_eq!(clock.ticks_for_ms(100), 1);
        assert_eq!(clock.ticks_for_ms(250), 3); // never shorten a wait
        assert_eq!(clock.ticks_for_ms(1_000), 10);
    }

    #[test]
    fn ticks_for_ms_is_at_least_one() {
        let clock = SimClock::new(100);
        assert_eq!(clock.ticks_for_ms(0), 1);
        assert_eq!(clock.ticks_for_ms(1), 1);
    }

    #[test]
    fn advance_moves_one_tick() {
        let mut clock = SimClock::new(100);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
        assert_eq!(clock.elapsed_ms(), 200);
    }

    #[test]
    fn config_end_tick() {
        let config = SimConfig { total_ticks: 42, ..SimConfig::default() };
        assert_eq!(config.end_tick(), Tick(42));
    }
}

// ── Points ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod points {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
        assert!((b.distance(a) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Point::new(5.0, 0.0));
        assert_eq!(a.lerp(b, 2.0), b); // clamped
    }
}

// ── RNG ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod rng {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = AgentRng::new(42, AgentId(7));
        let mut b = AgentRng::new(42, AgentId(7));
        for _ in 0..16 {
            assert_eq!(a.gen_range(0..1_000_000u32), b.gen_range(0..1_000_000u32));
        }
    }

    #[test]
    fn different_agents_diverge() {
        let mut a = AgentRng::new(42, AgentId(0));
        let mut b = AgentRng::new(42, AgentId(1));
        let va: Vec<u32> = (0..8).map(|_| a.gen_range(0..1_000_000)).collect();
        let vb: Vec<u32> = (0..8).map(|_| b.gen_range(0..1_000_000)).collect();
        assert_ne!(va, vb);
    }
}
