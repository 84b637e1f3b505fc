//! `shop-core` — foundational types for the `shopsim` retail simulation.
//!
//! This crate is a dependency of every other `shop-*` crate.  It intentionally
//! has no `shop-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`ids`]       | `AgentId`, `ShelfId`, `RegisterId`                    |
//! | [`name`]      | `Name` — interned string key for products/structures  |
//! | [`point`]     | `Point`, Euclidean distance on the floor plane        |
//! | [`product`]   | `Product`, product-list algebra                       |
//! | [`time`]      | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]       | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`error`]     | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod name;
pub mod point;
pub mod product;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, RegisterId, ShelfId};
pub use name::Name;
pub use point::Point;
pub use product::Product;
pub use rng::{AgentRng, SimRng};
pub use time::{SimClock, SimConfig, Tick};
