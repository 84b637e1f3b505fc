//! CSV asset loaders.
//!
//! # Product CSV format
//!
//! One row per product asset:
//!
//! ```csv
//! name,description,price,sell_price,sell_price_min,sell_price_max,shelf_kinds
//! Apples,A bag of apples,1.0,2.0,1.5,3.0,basic
//! Milk,A bottle of milk,1.5,2.5,2.0,4.0,basic
//! ```
//!
//! **`shelf_kinds`** is a `;`-separated list of shelf-kind tokens.
//!
//! # Structure CSV format
//!
//! ```csv
//! name,description,kind,price,max_content
//! Basic shelf,A simple display shelf,basic,50.0,10
//! ```
//!
//! Both loaders return the parsed assets as a `Vec`; compose them into a
//! [`Catalog`] with [`CatalogBuilder`], which is where duplicate detection
//! happens.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use shop_core::Name;

use crate::{CatalogError, ProductAsset, ShelfKind, StructureAsset};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ProductRecord {
    name:           String,
    description:    String,
    price:          f32,
    sell_price:     f32,
    sell_price_min: f32,
    sell_price_max: f32,
    shelf_kinds:    String,
}

#[derive(Deserialize)]
struct StructureRecord {
    name:        String,
    description: String,
    kind:        String,
    price:       f32,
    max_content: u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load product assets from a CSV file.
pub fn load_products_csv(path: &Path) -> Result<Vec<ProductAsset>, CatalogError> {
    let file = std::fs::File::open(path).map_err(CatalogError::Io)?;
    load_products_reader(file)
}

/// Like [`load_products_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded asset data.
pub fn load_products_reader<R: Read>(reader: R) -> Result<Vec<ProductAsset>, CatalogError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut assets = Vec::new();

    for result in csv_reader.deserialize::<ProductRecord>() {
        let row = result.map_err(|e| CatalogError::Parse(e.to_string()))?;
        assets.push(ProductAsset {
            name:           Name::from(row.name),
            description:    row.description,
            price:          row.price,
            sell_price:     row.sell_price,
            sell_price_min: row.sell_price_min,
            sell_price_max: row.sell_price_max,
            shelf_kinds:    parse_shelf_kinds(&row.shelf_kinds)?,
        });
    }

    Ok(assets)
}

/// Load structure assets from a CSV file.
pub fn load_structures_csv(path: &Path) -> Result<Vec<StructureAsset>, CatalogError> {
    let file = std::fs::File::open(path).map_err(CatalogError::Io)?;
    load_structures_reader(file)
}

/// Like [`load_structures_csv`] but accepts any `Read` source.
pub fn load_structures_reader<R: Read>(reader: R) -> Result<Vec<StructureAsset>, CatalogError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut assets = Vec::new();

    for result in csv_reader.deserialize::<StructureRecord>() {
        let row = result.map_err(|e| CatalogError::Parse(e.to_string()))?;
        let kind = ShelfKind::parse(&row.kind)
            .ok_or_else(|| CatalogError::UnknownShelfKind(row.kind.clone()))?;
        assets.push(StructureAsset {
            name:        Name::from(row.name),
            description: row.description,
            kind,
            price:       row.price,
            capacity:    row.max_content,
        });
    }

    Ok(assets)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_shelf_kinds(s: &str) -> Result<Vec<ShelfKind>, CatalogError> {
    s.split(';')
        .filter(|t| !t.trim().is_empty())
        .map(|t| ShelfKind::parse(t).ok_or_else(|| CatalogError::UnknownShelfKind(t.to_string())))
        .collect()
}
