//! Unit tests for shop-catalog.

use std::io::Cursor;

use shop_core::Name;

use crate::{Catalog, CatalogError, ProductAsset, ShelfKind, StructureAsset};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn apples() -> ProductAsset {
    ProductAsset {
        name:           Name::new("Apples"),
        description:    "A bag of apples".into(),
        price:          1.0,
        sell_price:     2.0,
        sell_price_min: 1.5,
        sell_price_max: 3.0,
        shelf_kinds:    vec![ShelfKind::Basic],
    }
}

fn milk() -> ProductAsset {
    ProductAsset {
        name:           Name::new("Milk"),
        description:    "A bottle of milk".into(),
        price:          1.5,
        sell_price:     2.5,
        sell_price_min: 2.0,
        sell_price_max: 4.0,
        shelf_kinds:    vec![ShelfKind::Basic],
    }
}

fn basic_shelf() -> StructureAsset {
    StructureAsset {
        name:        Name::new("Basic shelf"),
        description: "A simple display shelf".into(),
        kind:        ShelfKind::Basic,
        price:       50.0,
        capacity:    10,
    }
}

// ── Catalog ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod catalog {
    use super::*;

    #[test]
    fn lookup_by_name() {
        let cat = Catalog::builder()
            .product(apples())
            .product(milk())
            .structure(basic_shelf())
            .build()
            .unwrap();

        assert_eq!(cat.product("Milk").unwrap().sell_price, 2.5);
        assert_eq!(cat.structure("Basic shelf").unwrap().capacity, 10);
    }

    #[test]
    fn lookup_miss_is_none() {
        let cat = Catalog::builder().product(apples()).build().unwrap();
        assert!(cat.product("Caviar").is_none());
        assert!(cat.structure("Cold room").is_none());
    }

    #[test]
    fn duplicate_product_rejected() {
        let result = Catalog::builder().product(apples()).product(apples()).build();
        assert!(matches!(result, Err(CatalogError::DuplicateProduct(n)) if n == "Apples"));
    }

    #[test]
    fn duplicate_structure_rejected() {
        let result = Catalog::builder()
            .structure(basic_shelf())
            .structure(basic_shelf())
            .build();
        assert!(matches!(result, Err(CatalogError::DuplicateStructure(_))));
    }

    #[test]
    fn enumeration_preserves_insertion_order() {
        let cat = Catalog::builder().product(milk()).product(apples()).build().unwrap();
        let names: Vec<&str> = cat.products().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Milk", "Apples"]);
    }

    #[test]
    fn stock_issues_named_product() {
        let product = apples().stock(4);
        assert_eq!(product.name, "Apples");
        assert_eq!(product.quantity, 4);
    }
}

// ── Loaders ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loaders {
    use super::*;
    use crate::{load_products_reader, load_structures_reader};

    const PRODUCTS_CSV: &str = "\
name,description,price,sell_price,sell_price_min,sell_price_max,shelf_kinds
Apples,A bag of apples,1.0,2.0,1.5,3.0,basic
Milk,A bottle of milk,1.5,2.5,2.0,4.0,basic
";

    const STRUCTURES_CSV: &str = "\
name,description,kind,price,max_content
Basic shelf,A simple display shelf,basic,50.0,10
";

    #[test]
    fn products_load_from_csv() {
        let assets = load_products_reader(Cursor::new(PRODUCTS_CSV)).unwrap();
        assert_eq!(assets.len(), 2);
        assert_eq!(assets[0].name, "Apples");
        assert_eq!(assets[1].sell_price, 2.5);
        assert_eq!(assets[0].shelf_kinds, vec![ShelfKind::Basic]);
    }

    #[test]
    fn structures_load_from_csv() {
        let assets = load_structures_reader(Cursor::new(STRUCTURES_CSV)).unwrap();
        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].kind, ShelfKind::Basic);
        assert_eq!(assets[0].capacity, 10);
    }

    #[test]
    fn unknown_shelf_kind_is_an_error() {
        let csv = "\
name,description,kind,price,max_content
Cold room,A walk-in fridge,frozen,500.0,100
";
        let result = load_structures_reader(Cursor::new(csv));
        assert!(matches!(result, Err(CatalogError::UnknownShelfKind(k)) if k == "frozen"));
    }

    #[test]
    fn malformed_row_is_a_parse_error() {
        let csv = "\
name,description,price,sell_price,sell_price_min,sell_price_max,shelf_kinds
Apples,missing columns,1.0
";
        let result = load_products_reader(Cursor::new(csv));
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn loaded_assets_compose_into_a_catalog() {
        let mut b = Catalog::builder();
        for asset in load_products_reader(Cursor::new(PRODUCTS_CSV)).unwrap() {
            b = b.product(asset);
        }
        for asset in load_structures_reader(Cursor::new(STRUCTURES_CSV)).unwrap() {
            b = b.structure(asset);
        }
        let cat = b.build().unwrap();
        assert!(cat.product("Milk").is_some());
        assert!(cat.structure("Basic shelf").is_some());
    }
}
