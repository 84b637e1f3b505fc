//! The `Catalog` registry and its builder.

use rustc_hash::FxHashMap;

use shop_core::Name;

use crate::{CatalogError, ProductAsset, StructureAsset};

// ── Catalog ───────────────────────────────────────────────────────────────────

/// Read-only registry of every product and structure asset, keyed by name.
///
/// Assets are stored in insertion order (for deterministic enumeration) with
/// an `FxHashMap` index on top for O(1) name lookup.  The catalog is never
/// mutated after construction — build it with [`CatalogBuilder`] or the CSV
/// loaders and share it by reference.
pub struct Catalog {
    products: Vec<ProductAsset>,
    structures: Vec<StructureAsset>,
    product_index: FxHashMap<Name, usize>,
    structure_index: FxHashMap<Name, usize>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// The product asset named `name`, or `None` on a lookup miss.
    pub fn product(&self, name: &str) -> Option<&ProductAsset> {
        self.product_index.get(name).map(|&i| &self.products[i])
    }

    /// The structure asset named `name`, or `None` on a lookup miss.
    pub fn structure(&self, name: &str) -> Option<&StructureAsset> {
        self.structure_index.get(name).map(|&i| &self.structures[i])
    }

    // ── Enumeration ───────────────────────────────────────────────────────

    /// All product assets in insertion order.
    pub fn products(&self) -> &[ProductAsset] {
        &self.products
    }

    /// All structure assets in insertion order.
    pub fn structures(&self) -> &[StructureAsset] {
        &self.structures
    }
}

// ── CatalogBuilder ────────────────────────────────────────────────────────────

/// Fluent builder for [`Catalog`].
///
/// Duplicate names are detected at [`build`](Self::build) and rejected with
/// [`CatalogError::DuplicateProduct`] / [`CatalogError::DuplicateStructure`].
#[derive(Default)]
pub struct CatalogBuilder {
    products: Vec<ProductAsset>,
    structures: Vec<StructureAsset>,
}

impl CatalogBuilder {
    pub fn product(mut self, asset: ProductAsset) -> Self {
        self.products.push(asset);
        self
    }

    pub fn structure(mut self, asset: StructureAsset) -> Self {
        self.structures.push(asset);
        self
    }

    /// Index the collected assets, rejecting duplicate names.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        let mut product_index = FxHashMap::default();
        for (i, asset) in self.products.iter().enumerate() {
            if product_index.insert(asset.name.clone(), i).is_some() {
                return Err(CatalogError::DuplicateProduct(asset.name.clone()));
            }
        }

        let mut structure_index = FxHashMap::default();
        for (i, asset) in self.structures.iter().enumerate() {
            if structure_index.insert(asset.name.clone(), i).is_some() {
                return Err(CatalogError::DuplicateStructure(asset.name.clone()));
            }
        }

        Ok(Catalog {
            products: self.products,
            structures: self.structures,
            product_index,
            structure_index,
        })
    }
}
