//! Checkout registers — bounded waiting queues plus the payment cursor.

use shop_core::{AgentId, Point, RegisterId, Tick};

// ── Payment ───────────────────────────────────────────────────────────────────

/// The in-flight payment procedure a register runs for its front customer.
///
/// The register — not the shopper — drives payment: one cart unit is scanned
/// per step, the running total accumulates, and a randomized per-unit delay
/// paces the next step.  The shopper merely polls its own `has_paid` flag.
#[derive(Clone, Debug, PartialEq)]
pub struct Payment {
    /// The shopper being charged.
    pub customer: AgentId,
    /// Index of the cart entry currently being scanned.
    pub item: usize,
    /// Units of that entry scanned so far.
    pub unit: u32,
    /// Total accumulated so far.
    pub total: f32,
    /// Tick at which the next unit is scanned (or the payment settles, once
    /// every unit has been scanned).
    pub next_step: Tick,
}

impl Payment {
    pub fn new(customer: AgentId, now: Tick) -> Self {
        Self { customer, item: 0, unit: 0, total: 0.0, next_step: now }
    }
}

// ── Register ──────────────────────────────────────────────────────────────────

/// A checkout register: an ordered queue of waiting shoppers bounded by the
/// number of physical queue slots.
///
/// Invariants:
/// - `queue.len() <= queue_slots.len()` at all times (checked on join against
///   the live length, so the bound cannot be raced past).
/// - A queued shopper's recorded index equals its position in `queue`.
#[derive(Clone, Debug)]
pub struct Register {
    pub id: RegisterId,

    /// Closed registers are invisible to probing shoppers; their queues keep
    /// draining.
    pub open: bool,

    /// Where the register stands, used for nearest-register queries.
    pub position: Point,

    /// Physical waiting positions; slot 0 is at the counter.
    pub queue_slots: Vec<Point>,

    /// Waiting shoppers, front first.
    pub queue: Vec<AgentId>,

    /// The payment being processed for `queue[0]`, if any.
    pub payment: Option<Payment>,
}

impl Register {
    pub fn new(id: RegisterId, position: Point, queue_slots: Vec<Point>, open: bool) -> Self {
        Self {
            id,
            open,
            position,
            queue_slots,
            queue: Vec::new(),
            payment: None,
        }
    }

    /// `true` when every queue slot is occupied.  Recomputed from live
    /// lengths on every call — there is no cached flag to go stale.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.queue.len() >= self.queue_slots.len()
    }

    /// Append `agent` to the queue tail.
    ///
    /// Returns the assigned queue index, or `None` when the queue is full —
    /// an expected steady-state outcome the caller answers by probing other
    /// registers, never an error.
    pub fn join_queue(&mut self, agent: AgentId) -> Option<usize> {
        if self.is_full() {
            return None;
        }
        self.queue.push(agent);
        // Clamp to the last valid slot; a no-op given the fullness check, but
        // the slot index must never exceed the physical positions.
        Some((self.queue.len() - 1).min(self.queue_slots.len() - 1))
    }

    /// Remove `agent` from the queue (post-payment) and reassign every
    /// remaining member's index to its new position.
    ///
    /// Returns `(agent, new_index)` for each shopper still queued, in queue
    /// order — an O(n) rebroadcast, acceptable for a small bounded queue.
    pub fn remove_customer(&mut self, agent: AgentId) -> Vec<(AgentId, usize)> {
        if let Some(pos) = self.queue.iter().position(|&a| a == agent) {
            self.queue.remove(pos);
        }
        self.queue.iter().copied().enumerate().map(|(i, a)| (a, i)).collect()
    }

    /// Install the payment cursor for `agent`, starting at `now`.
    ///
    /// # Panics
    ///
    /// Debug-asserts that no payment is already running — only the front
    /// shopper may start one, and there is only one front.
    pub fn begin_payment(&mut self, agent: AgentId, now: Tick) {
        debug_assert!(
            self.payment.is_none(),
            "register {} started a payment while one was in flight",
            self.id
        );
        self.payment = Some(Payment::new(agent, now));
    }

    /// Walk target for queue index `idx`.
    #[inline]
    pub fn slot(&self, idx: usize) -> Point {
        self.queue_slots[idx]
    }
}
