//! The `Shopper` and its lifecycle phases.

use shop_core::{AgentId, AgentRng, Product, RegisterId, ShelfId};

// ── Phases ────────────────────────────────────────────────────────────────────

/// Progress through one visit to a claimed shelf.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Walking to the shelf's stand point.
    Heading { shelf: ShelfId },
    /// At the shelf, taking one unit per delay tick.
    Taking { shelf: ShelfId },
}

/// A shopper's position in its lifecycle.  Strictly forward-moving — there
/// are no backward transitions, only the join-failure reset from `Queuing`
/// back to `RoutingToRegister`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// First wake after spawning: draw the wanted list.
    GeneratingList,
    /// Working through wanted item `item`.
    Shopping { item: usize, stage: Stage },
    /// Probing for any open register (no reservation yet).
    RoutingToRegister,
    /// Enqueued at `register`; `last_index` is the slot last walked to.
    Queuing {
        register: RegisterId,
        last_index: Option<usize>,
    },
    /// Waiting for `register` to mark us paid.
    Paying { register: RegisterId },
    /// Walking to the store exit.
    Exiting,
    /// Despawned; the slot is inert for the rest of the run.
    Done,
}

impl Phase {
    /// Stable lowercase label for reports and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Phase::GeneratingList => "generating-list",
            Phase::Shopping { .. } => "shopping",
            Phase::RoutingToRegister => "routing-to-register",
            Phase::Queuing { .. } => "queuing",
            Phase::Paying { .. } => "paying",
            Phase::Exiting => "exiting",
            Phase::Done => "done",
        }
    }
}

// ── Shopper ───────────────────────────────────────────────────────────────────

/// One autonomous customer.
///
/// The shopper owns its state machine and its RNG; everything it shares with
/// other shoppers (shelves, queues, the ledger) lives in `StoreWorld` and is
/// only touched through intents.
pub struct Shopper {
    pub id: AgentId,

    /// What the shopper came for.  Entries are name-unique (duplicates merge
    /// at generation time), so cart progress for an item is simply the cart's
    /// quantity under that name.
    pub wanted: Vec<Product>,

    /// What the shopper has picked up so far.
    pub cart: Vec<Product>,

    /// Queue rank at the joined register; `None` while not queued.
    /// 0 = next to be served.
    pub queue_index: Option<usize>,

    /// Set by the register when the payment procedure settles.  The shopper
    /// only ever reads it.
    pub has_paid: bool,

    pub phase: Phase,

    /// Private deterministic randomness (list generation).
    pub rng: AgentRng,
}

impl Shopper {
    /// A fresh shopper that will draw its wanted list on first wake.
    pub fn new(id: AgentId, rng: AgentRng) -> Self {
        Self {
            id,
            wanted: Vec::new(),
            cart: Vec::new(),
            queue_index: None,
            has_paid: false,
            phase: Phase::GeneratingList,
            rng,
        }
    }

    /// A shopper with a preset wanted list (scenario setup); generation is
    /// skipped when the list is already non-empty.
    pub fn with_list(id: AgentId, rng: AgentRng, wanted: Vec<Product>) -> Self {
        Self { wanted, ..Self::new(id, rng) }
    }

    /// `true` once the shopper has despawned.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }
}

// ── ShopperStore ──────────────────────────────────────────────────────────────

/// All shoppers ever spawned this run, indexed by `AgentId`.
///
/// Despawned shoppers stay in place as inert `Phase::Done` entries so ids
/// remain stable; the store only ever grows.
#[derive(Default)]
pub struct ShopperStore {
    shoppers: Vec<Shopper>,
}

impl ShopperStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next spawned shopper will receive.
    #[inline]
    pub fn next_id(&self) -> AgentId {
        AgentId(self.shoppers.len() as u32)
    }

    /// Append a shopper.
    ///
    /// # Panics
    ///
    /// Debug-asserts that the shopper's id matches its slot.
    pub fn push(&mut self, shopper: Shopper) -> AgentId {
        debug_assert_eq!(shopper.id, self.next_id(), "shopper id out of order");
        let id = shopper.id;
        self.shoppers.push(shopper);
        id
    }

    #[inline]
    pub fn get(&self, id: AgentId) -> &Shopper {
        &self.shoppers[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: AgentId) -> &mut Shopper {
        &mut self.shoppers[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shopper> {
        self.shoppers.iter()
    }

    /// Count of shoppers still inside the store.
    pub fn active_count(&self) -> usize {
        self.shoppers.iter().filter(|s| !s.is_done()).count()
    }

    /// Total shoppers ever spawned.
    pub fn len(&self) -> usize {
        self.shoppers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shoppers.is_empty()
    }
}
