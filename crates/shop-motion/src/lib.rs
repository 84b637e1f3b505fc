//! `shop-motion` — agent walking state and arrival tracking.
//!
//! # Crate layout
//!
//! | Module     | Contents                                            |
//! |------------|-----------------------------------------------------|
//! | [`state`]  | `WalkState` — per-agent travel state                |
//! | [`engine`] | `MotionEngine` — destinations + arrival advancement |
//!
//! # Movement model (teleport-at-arrival)
//!
//! The core does not steer.  It hands this crate a destination and observes
//! arrival; everything in between — animation, collision, actual steering —
//! belongs to a presentation layer that can interpolate along the straight
//! line via [`MotionEngine::position`].
//!
//! 1. `MotionEngine::begin_walk` computes
//!    `arrival_tick = now + max(1, ceil(distance / speed))` in ticks.
//! 2. The agent logically stays at its departure point until `arrival_tick`.
//! 3. `MotionEngine::tick_arrivals(now)` marks every agent whose
//!    `arrival_tick <= now` stationary at its destination.
//! 4. The simulation loop wakes arriving agents (their arrival tick was
//!    pushed into the wake queue when the walk began).
//!
//! Re-targeting mid-walk is legal: the new walk departs from the agent's
//! current interpolated position, which is what a shopper does when its queue
//! index advances while it is still walking to the previous slot.

pub mod engine;
pub mod state;

#[cfg(test)]
mod tests;

pub use engine::MotionEngine;
pub use state::WalkState;
