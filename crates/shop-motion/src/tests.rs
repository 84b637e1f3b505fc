//! Unit tests for shop-motion.

use shop_core::{AgentId, Point, Tick};

use crate::{MotionEngine, WalkState};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Engine at the default 100 ms tick with one agent standing at the origin.
fn engine_with_agent() -> (MotionEngine, AgentId) {
    let mut engine = MotionEngine::new(100);
    let agent = engine.push_agent(Point::new(0.0, 0.0), Tick(0));
    (engine, agent)
}

// ── WalkState ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod walk_state {
    use super::*;

    #[test]
    fn stationary_progress_is_one() {
        let s = WalkState::stationary(Point::new(1.0, 2.0), Tick(10));
        assert_eq!(s.progress(Tick(10)), 1.0);
        assert_eq!(s.progress(Tick(99)), 1.0);
        assert!(!s.walking);
        assert_eq!(s.position(Tick(50)), Point::new(1.0, 2.0));
    }

    #[test]
    fn walking_interpolates_between_endpoints() {
        let s = WalkState {
            walking:        true,
            from:           Point::new(0.0, 0.0),
            to:             Point::new(10.0, 0.0),
            departure_tick: Tick(0),
            arrival_tick:   Tick(10),
        };
        assert_eq!(s.position(Tick(0)), Point::new(0.0, 0.0));
        assert_eq!(s.position(Tick(5)), Point::new(5.0, 0.0));
        assert_eq!(s.position(Tick(10)), Point::new(10.0, 0.0));
        assert_eq!(s.position(Tick(20)), Point::new(10.0, 0.0)); // capped
    }
}

// ── MotionEngine ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod engine {
    use super::*;

    #[test]
    fn walk_duration_from_distance_and_speed() {
        let (mut engine, agent) = engine_with_agent();
        // 10 m at 1 m/s = 10 s = 100 ticks at 100 ms/tick.
        let arrival = engine.begin_walk(agent, Point::new(10.0, 0.0), Tick(0), 1.0);
        assert_eq!(arrival, Tick(100));
        assert!(engine.is_walking(agent));
    }

    #[test]
    fn zero_length_walk_still_takes_one_tick() {
        let (mut engine, agent) = engine_with_agent();
        let arrival = engine.begin_walk(agent, Point::new(0.0, 0.0), Tick(5), 1.0);
        assert_eq!(arrival, Tick(6));
    }

    #[test]
    fn arrivals_mark_agents_stationary_at_destination() {
        let (mut engine, agent) = engine_with_agent();
        let arrival = engine.begin_walk(agent, Point::new(2.0, 0.0), Tick(0), 1.0);

        assert!(engine.tick_arrivals(Tick(arrival.0 - 1)).is_empty());
        let arrived = engine.tick_arrivals(arrival);
        assert_eq!(arrived, vec![agent]);
        assert!(!engine.is_walking(agent));
        assert_eq!(engine.position(agent, arrival), Point::new(2.0, 0.0));
    }

    #[test]
    fn retarget_departs_from_interpolated_position() {
        let (mut engine, agent) = engine_with_agent();
        engine.begin_walk(agent, Point::new(10.0, 0.0), Tick(0), 1.0); // arrives T100

        // Halfway there, change destination.
        engine.begin_walk(agent, Point::new(5.0, 5.0), Tick(50), 1.0);
        let state = &engine.states[agent.index()];
        assert_eq!(state.from, Point::new(5.0, 0.0)); // mid-walk position
        assert_eq!(state.to, Point::new(5.0, 5.0));
        // 5 m remaining at 1 m/s = 50 ticks.
        assert_eq!(state.arrival_tick, Tick(100));
    }

    #[test]
    fn agents_are_indexed_in_spawn_order() {
        let mut engine = MotionEngine::new(100);
        let a = engine.push_agent(Point::new(0.0, 0.0), Tick(0));
        let b = engine.push_agent(Point::new(1.0, 0.0), Tick(3));
        assert_eq!(a, AgentId(0));
        assert_eq!(b, AgentId(1));
        assert_eq!(engine.len(), 2);
    }

    #[test]
    fn only_due_agents_arrive() {
        let mut engine = MotionEngine::new(100);
        let a = engine.push_agent(Point::new(0.0, 0.0), Tick(0));
        let b = engine.push_agent(Point::new(0.0, 0.0), Tick(0));
        engine.begin_walk(a, Point::new(1.0, 0.0), Tick(0), 1.0); // arrives T10
        engine.begin_walk(b, Point::new(9.0, 0.0), Tick(0), 1.0); // arrives T90

        assert_eq!(engine.tick_arrivals(Tick(10)), vec![a]);
        assert!(engine.tick_arrivals(Tick(11)).is_empty());
        assert_eq!(engine.tick_arrivals(Tick(90)), vec![b]);
    }
}
