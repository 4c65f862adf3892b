//! Demo dataset for local runs.

use chrono::{Duration, Utc};

use stockroom_catalog::{NewCategory, NewLocation, NewProduct, Price, Product};
use stockroom_core::MovementId;
use stockroom_ledger::{MovementType, StockMovement};

use crate::store::InventoryStore;

/// Populate `store` with a small, self-consistent warehouse: categories,
/// locations, products, and a few days of movement history.
///
/// Seeded quantities already include the seeded movements, which is why the
/// history is inserted as records instead of replayed through the ledger.
pub fn seed_demo_data(store: &InventoryStore) {
    for (name, description) in [
        ("Electronics", "Electronic devices and components"),
        ("Tools", "Hand and power tools"),
        ("Hardware", "Nuts, bolts, and fasteners"),
        ("Safety Equipment", "PPE and safety gear"),
    ] {
        store.create_category(NewCategory {
            name: name.to_string(),
            description: Some(description.to_string()),
        });
    }

    for (zone, shelf, bin) in [
        ("A", "1", Some("A")),
        ("A", "1", Some("B")),
        ("A", "2", Some("A")),
        ("B", "1", None),
        ("B", "2", Some("A")),
        ("C", "1", None),
    ] {
        store.create_location(NewLocation {
            zone: zone.to_string(),
            shelf: shelf.to_string(),
            bin: bin.map(str::to_string),
        });
    }

    let mouse = store.create_product(demo_product(
        "Wireless Mouse",
        "ELC-001",
        "Ergonomic wireless mouse with USB receiver",
        45,
        20,
        "Electronics",
        "A-1-A",
        2999,
    ));
    let cable = store.create_product(demo_product(
        "USB-C Cable",
        "ELC-002",
        "2m USB-C to USB-A cable",
        150,
        50,
        "Electronics",
        "A-1-B",
        1299,
    ));
    store.create_product(demo_product(
        "Power Drill",
        "TLS-001",
        "18V cordless power drill with battery",
        8,
        10,
        "Tools",
        "B-1",
        8999,
    ));
    store.create_product(demo_product(
        "Screwdriver Set",
        "TLS-002",
        "12-piece precision screwdriver set",
        25,
        15,
        "Tools",
        "B-2-A",
        2499,
    ));
    store.create_product(demo_product(
        "M6 Bolts (Box of 100)",
        "HRD-001",
        "Stainless steel M6 bolts",
        5,
        10,
        "Hardware",
        "A-2-A",
        1599,
    ));
    store.create_product(demo_product(
        "Safety Goggles",
        "SFT-001",
        "Anti-fog safety goggles",
        0,
        20,
        "Safety Equipment",
        "C-1",
        899,
    ));
    store.create_product(demo_product(
        "Work Gloves",
        "SFT-002",
        "Cut-resistant work gloves (Size L)",
        35,
        25,
        "Safety Equipment",
        "C-1",
        1499,
    ));

    store.insert_movement(demo_movement(&mouse, MovementType::In, 50, "Initial stock", 7));
    store.insert_movement(demo_movement(&mouse, MovementType::Out, 5, "Customer order #1234", 2));
    store.insert_movement(demo_movement(&cable, MovementType::In, 200, "Restocking", 5));
    store.insert_movement(demo_movement(&cable, MovementType::Out, 50, "Bulk order", 1));
}

fn demo_product(
    name: &str,
    sku: &str,
    description: &str,
    quantity: i64,
    min_stock_level: i64,
    category: &str,
    location: &str,
    price_cents: u64,
) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        sku: sku.to_string(),
        description: Some(description.to_string()),
        quantity,
        min_stock_level,
        category: category.to_string(),
        location: location.to_string(),
        price: Some(Price::from_cents(price_cents)),
    }
}

fn demo_movement(
    product: &Product,
    movement_type: MovementType,
    quantity: i64,
    notes: &str,
    days_ago: i64,
) -> StockMovement {
    StockMovement {
        id: MovementId::new(),
        product_id: product.id,
        product_name: product.name.clone(),
        product_sku: product.sku.clone(),
        movement_type,
        quantity,
        notes: Some(notes.to_string()),
        timestamp: Utc::now() - Duration::days(days_ago),
    }
}
