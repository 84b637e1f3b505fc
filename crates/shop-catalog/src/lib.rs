//! `shop-catalog` — immutable asset registries for the shopsim simulation.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`asset`]   | `ProductAsset`, `StructureAsset`, `ShelfKind`             |
//! | [`catalog`] | `Catalog`, `CatalogBuilder` (name-keyed lookup)           |
//! | [`loader`]  | `load_products_csv`, `load_structures_csv` (+`_reader`)   |
//! | [`error`]   | `CatalogError`, `CatalogResult<T>`                        |
//!
//! # Design notes
//!
//! The catalog is built once at startup and consumed read-only by every other
//! component; name is the only key.  A lookup miss is an `Option::None`, not
//! an error — callers decide whether absence means "skip" (an agent looking
//! for a discontinued product) or "bug" (a cart holding a product the catalog
//! never issued).
//!
//! Duplicate names are rejected at build time with a loud error: letting two
//! assets share a name would make every later lookup silently resolve to one
//! of them, which is exactly the kind of data-integrity problem that should
//! fail fast.

pub mod asset;
pub mod catalog;
pub mod error;
pub mod loader;

#[cfg(test)]
mod tests;

pub use asset::{ProductAsset, ShelfKind, StructureAsset};
pub use catalog::{Catalog, CatalogBuilder};
pub use error::{CatalogError, CatalogResult};
pub use loader::{
    load_products_csv, load_products_reader, load_structures_csv, load_structures_reader,
};
