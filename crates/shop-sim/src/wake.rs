//! `WakeQueue` — sparse per-tick agent activation.
//!
//! Most shoppers are idle most ticks (mid-walk, mid-delay).  Rather than
//! asking every agent "anything to do?" every tick, each agent registers the
//! tick at which it next needs attention, and the loop drains exactly that
//! tick's entries — O(woken) work instead of O(population).
//!
//! An agent may legitimately appear twice at one tick (a poll wake and an
//! arrival wake can coincide); the simulation deduplicates on drain so a
//! lifecycle step runs at most once per agent per tick.

use std::collections::BTreeMap;

use shop_core::{AgentId, Tick};

/// Maps future ticks to the agents due to step at them.
#[derive(Default)]
pub struct WakeQueue {
    inner: BTreeMap<Tick, Vec<AgentId>>,
    /// Cached entry count for O(1) `len()`.
    total: usize,
}

impl WakeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `agent` to wake at `tick`.  Duplicate (tick, agent) pairs are
    /// allowed; the drainer deduplicates.
    pub fn push(&mut self, tick: Tick, agent: AgentId) {
        self.inner.entry(tick).or_default().push(agent);
        self.total += 1;
    }

    /// Remove and return all agents scheduled for exactly `tick`, in push
    /// order.  Returns an empty vec for quiet ticks without allocating.
    pub fn drain_tick(&mut self, tick: Tick) -> Vec<AgentId> {
        match self.inner.remove(&tick) {
            Some(agents) => {
                self.total -= agents.len();
                agents
            }
            None => Vec::new(),
        }
    }

    /// The earliest tick with at least one queued agent, or `None` if empty.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// Total (tick, agent) entries across all future ticks.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
