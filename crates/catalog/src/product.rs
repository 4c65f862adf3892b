//! Product catalog entries and their field validation.

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, ProductId};

use crate::price::Price;

/// A stocked product.
///
/// `category` and `location` are plain strings: products reference categories
/// by name and locations by their `zone-shelf[-bin]` key, so catalog edits
/// never cascade into the product list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    /// Units on hand. Never negative; the movement ledger guards this.
    pub quantity: i64,
    /// Threshold at or below which the product counts as low stock.
    pub min_stock_level: i64,
    pub category: String,
    pub location: String,
    pub price: Option<Price>,
}

impl Product {
    /// At or below the reorder threshold.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_stock_level
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.quantity == 0
    }

    /// Merge a partial update; `None` fields keep their current value.
    pub fn apply_update(&mut self, update: ProductUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(sku) = update.sku {
            self.sku = sku;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        if let Some(min_stock_level) = update.min_stock_level {
            self.min_stock_level = min_stock_level;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(price) = update.price {
            self.price = Some(price);
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &ProductId {
        &self.id
    }
}

/// Input for creating a product. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    pub quantity: i64,
    pub min_stock_level: i64,
    pub category: String,
    pub location: String,
    pub price: Option<Price>,
}

impl NewProduct {
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.sku.trim().is_empty() {
            return Err(DomainError::validation("SKU cannot be empty"));
        }
        if self.quantity < 0 {
            return Err(DomainError::validation("quantity cannot be negative"));
        }
        if self.min_stock_level < 0 {
            return Err(DomainError::validation("minimum stock level cannot be negative"));
        }
        if self.category.trim().is_empty() {
            return Err(DomainError::validation("category cannot be empty"));
        }
        if self.location.trim().is_empty() {
            return Err(DomainError::validation("location cannot be empty"));
        }
        Ok(())
    }
}

/// Partial product update; `None` keeps the stored value.
///
/// `description` and `price` can be set but not cleared back to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i64>,
    pub min_stock_level: Option<i64>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub price: Option<Price>,
}

impl ProductUpdate {
    pub fn validate(&self) -> DomainResult<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(DomainError::validation("name cannot be empty"));
            }
        }
        if let Some(sku) = &self.sku {
            if sku.trim().is_empty() {
                return Err(DomainError::validation("SKU cannot be empty"));
            }
        }
        if let Some(quantity) = self.quantity {
            if quantity < 0 {
                return Err(DomainError::validation("quantity cannot be negative"));
            }
        }
        if let Some(min_stock_level) = self.min_stock_level {
            if min_stock_level < 0 {
                return Err(DomainError::validation("minimum stock level cannot be negative"));
            }
        }
        if let Some(category) = &self.category {
            if category.trim().is_empty() {
                return Err(DomainError::validation("category cannot be empty"));
            }
        }
        if let Some(location) = &self.location {
            if location.trim().is_empty() {
                return Err(DomainError::validation("location cannot be empty"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_new_product() -> NewProduct {
        NewProduct {
            name: "Wireless Mouse".to_string(),
            sku: "ELC-001".to_string(),
            description: Some("Ergonomic wireless mouse".to_string()),
            quantity: 45,
            min_stock_level: 20,
            category: "Electronics".to_string(),
            location: "A-1-A".to_string(),
            price: Some(Price::from_cents(2999)),
        }
    }

    fn test_product() -> Product {
        Product {
            id: ProductId::new(),
            name: "Wireless Mouse".to_string(),
            sku: "ELC-001".to_string(),
            description: Some("Ergonomic wireless mouse".to_string()),
            quantity: 45,
            min_stock_level: 20,
            category: "Electronics".to_string(),
            location: "A-1-A".to_string(),
            price: Some(Price::from_cents(2999)),
        }
    }

    #[test]
    fn new_product_with_valid_fields_passes() {
        assert!(test_new_product().validate().is_ok());
    }

    #[test]
    fn new_product_rejects_blank_name_and_sku() {
        let mut new = test_new_product();
        new.name = "   ".to_string();
        match new.validate().unwrap_err() {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for blank name"),
        }

        let mut new = test_new_product();
        new.sku = String::new();
        match new.validate().unwrap_err() {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for blank SKU"),
        }
    }

    #[test]
    fn new_product_rejects_negative_quantities() {
        let mut new = test_new_product();
        new.quantity = -1;
        assert!(new.validate().is_err());

        let mut new = test_new_product();
        new.min_stock_level = -5;
        assert!(new.validate().is_err());
    }

    #[test]
    fn apply_update_merges_only_provided_fields() {
        let mut product = test_product();
        product.apply_update(ProductUpdate {
            name: Some("Bluetooth Mouse".to_string()),
            quantity: Some(30),
            ..ProductUpdate::default()
        });

        assert_eq!(product.name, "Bluetooth Mouse");
        assert_eq!(product.quantity, 30);
        // Untouched fields keep their stored values.
        assert_eq!(product.sku, "ELC-001");
        assert_eq!(product.description.as_deref(), Some("Ergonomic wireless mouse"));
        assert_eq!(product.min_stock_level, 20);
        assert_eq!(product.price, Some(Price::from_cents(2999)));
    }

    #[test]
    fn empty_update_is_a_no_op() {
        let mut product = test_product();
        let before = product.clone();
        product.apply_update(ProductUpdate::default());
        assert_eq!(product, before);
    }

    #[test]
    fn update_validation_checks_provided_fields_only() {
        assert!(ProductUpdate::default().validate().is_ok());

        let update = ProductUpdate {
            quantity: Some(-3),
            ..ProductUpdate::default()
        };
        assert!(update.validate().is_err());

        let update = ProductUpdate {
            location: Some("  ".to_string()),
            ..ProductUpdate::default()
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn low_stock_threshold_is_inclusive() {
        let mut product = test_product();
        product.quantity = 20;
        product.min_stock_level = 20;
        assert!(product.is_low_stock());

        product.quantity = 21;
        assert!(!product.is_low_stock());

        product.quantity = 0;
        assert!(product.is_low_stock());
        assert!(product.is_out_of_stock());
    }
}
