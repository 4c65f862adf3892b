//! On-demand reporting over the product list.

use serde::Serialize;

use stockroom_catalog::Product;

use crate::store::InventoryStore;

/// Aggregate inventory snapshot.
///
/// Recomputed by a full product scan on every call; nothing is cached or
/// maintained incrementally. Group rows appear in the order the scan first
/// meets each key. Quantity and value sums saturate at their numeric limits
/// instead of wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryReport {
    /// Total stock value in cents; unpriced products contribute zero.
    pub total_value_cents: u64,
    pub category_stats: Vec<CategoryStats>,
    pub location_stats: Vec<LocationStats>,
    pub low_stock_count: usize,
    pub out_of_stock_count: usize,
}

/// Per-category rollup, keyed by the product's category string as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    pub category: String,
    pub count: usize,
    pub quantity: i64,
    pub value_cents: u64,
}

/// Per-location rollup, keyed by the product's location string as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationStats {
    pub location: String,
    pub count: usize,
    pub quantity: i64,
}

fn value_cents(product: &Product) -> u64 {
    match product.price {
        Some(price) if product.quantity > 0 => {
            (product.quantity as u64).saturating_mul(price.cents())
        }
        _ => 0,
    }
}

impl InventoryStore {
    /// Derive summary statistics by scanning every product.
    pub fn reporting(&self) -> InventoryReport {
        let products = self.list_products();

        let mut total_value_cents = 0u64;
        let mut category_stats: Vec<CategoryStats> = Vec::new();
        let mut location_stats: Vec<LocationStats> = Vec::new();
        let mut low_stock_count = 0;
        let mut out_of_stock_count = 0;

        for product in &products {
            let value = value_cents(product);
            total_value_cents = total_value_cents.saturating_add(value);

            match category_stats.iter_mut().find(|s| s.category == product.category) {
                Some(stats) => {
                    stats.count += 1;
                    stats.quantity = stats.quantity.saturating_add(product.quantity);
                    stats.value_cents = stats.value_cents.saturating_add(value);
                }
                None => category_stats.push(CategoryStats {
                    category: product.category.clone(),
                    count: 1,
                    quantity: product.quantity,
                    value_cents: value,
                }),
            }

            match location_stats.iter_mut().find(|s| s.location == product.location) {
                Some(stats) => {
                    stats.count += 1;
                    stats.quantity = stats.quantity.saturating_add(product.quantity);
                }
                None => location_stats.push(LocationStats {
                    location: product.location.clone(),
                    count: 1,
                    quantity: product.quantity,
                }),
            }

            if product.is_low_stock() {
                low_stock_count += 1;
            }
            if product.is_out_of_stock() {
                out_of_stock_count += 1;
            }
        }

        InventoryReport {
            total_value_cents,
            category_stats,
            location_stats,
            low_stock_count,
            out_of_stock_count,
        }
    }
}
