//! The `MotionEngine` — destinations in, arrival ticks out.

use shop_core::{AgentId, Point, Tick};

use crate::WalkState;

/// Tracks every agent's walking state on the floor plane.
///
/// The `states` vector is indexed by `AgentId` and grows as the spawner
/// admits shoppers; agents are never removed (a despawned shopper's state
/// simply stops changing).
pub struct MotionEngine {
    /// Milliseconds per simulation tick, fixed at construction.
    tick_duration_ms: u32,

    /// Per-agent walking state, indexed by `AgentId`.
    pub states: Vec<WalkState>,
}

impl MotionEngine {
    pub fn new(tick_duration_ms: u32) -> Self {
        Self { tick_duration_ms, states: Vec::new() }
    }

    /// Register a newly spawned agent standing at `point`.
    ///
    /// Agents must be pushed in `AgentId` order; the new id is implied by the
    /// current length.
    pub fn push_agent(&mut self, point: Point, now: Tick) -> AgentId {
        let id = AgentId(self.states.len() as u32);
        self.states.push(WalkState::stationary(point, now));
        id
    }

    /// Start (or re-target) a walk toward `dest` at `speed` metres/second.
    ///
    /// The walk departs from the agent's current interpolated position, so
    /// calling this mid-walk redirects the agent smoothly.  Returns the
    /// arrival tick — always at least one tick in the future, even for a
    /// zero-length walk.
    pub fn begin_walk(&mut self, agent: AgentId, dest: Point, now: Tick, speed: f32) -> Tick {
        let here = self.states[agent.index()].position(now);

        let distance = here.distance(dest);
        let travel_ms = if speed > 0.0 {
            (distance / speed * 1_000.0).ceil() as u64
        } else {
            0
        };
        let travel_ticks = travel_ms.div_ceil(self.tick_duration_ms as u64).max(1);
        let arrival_tick = Tick(now.0 + travel_ticks);

        self.states[agent.index()] = WalkState {
            walking:        true,
            from:           here,
            to:             dest,
            departure_tick: now,
            arrival_tick,
        };
        arrival_tick
    }

    /// Mark every agent whose `arrival_tick <= now` stationary at its
    /// destination.  Returns the agents that arrived this tick.
    pub fn tick_arrivals(&mut self, now: Tick) -> Vec<AgentId> {
        let mut arrived = Vec::new();
        for (i, state) in self.states.iter_mut().enumerate() {
            if state.walking && state.arrival_tick <= now {
                *state = WalkState::stationary(state.to, now);
                arrived.push(AgentId(i as u32));
            }
        }
        arrived
    }

    /// `true` while `agent` has not yet reached its destination.
    #[inline]
    pub fn is_walking(&self, agent: AgentId) -> bool {
        self.states[agent.index()].walking
    }

    /// Interpolated position of `agent` at `now`, for distance queries and
    /// presentation.
    #[inline]
    pub fn position(&self, agent: AgentId, now: Tick) -> Point {
        self.states[agent.index()].position(now)
    }

    /// Number of agents ever registered.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
