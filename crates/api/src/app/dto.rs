use serde::Deserialize;

use stockroom_catalog::{
    Category, CategoryUpdate, Location, LocationUpdate, NewCategory, NewLocation, NewProduct,
    Price, Product, ProductUpdate,
};
use stockroom_core::ProductId;
use stockroom_ledger::{NewMovement, StockMovement};

use crate::app::errors;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    pub quantity: i64,
    pub min_stock_level: i64,
    pub category: String,
    pub location: String,
    pub price: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i64>,
    pub min_stock_level: Option<i64>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub price: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateLocationRequest {
    pub zone: String,
    pub shelf: String,
    pub bin: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateLocationRequest {
    pub zone: Option<String>,
    pub shelf: Option<String>,
    pub bin: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecordMovementRequest {
    pub product_id: String,
    #[serde(rename = "type")]
    pub movement_type: String,
    pub quantity: i64,
    pub notes: Option<String>,
}

// -------------------------
// Request mapping helpers
// -------------------------

fn parse_price(raw: Option<String>) -> Result<Option<Price>, axum::response::Response> {
    match raw {
        Some(s) => match Price::parse(&s) {
            Ok(price) => Ok(Some(price)),
            Err(e) => Err(errors::domain_error_to_response(e)),
        },
        None => Ok(None),
    }
}

pub fn to_new_product(req: CreateProductRequest) -> Result<NewProduct, axum::response::Response> {
    let new_product = NewProduct {
        name: req.name,
        sku: req.sku,
        description: req.description,
        quantity: req.quantity,
        min_stock_level: req.min_stock_level,
        category: req.category,
        location: req.location,
        price: parse_price(req.price)?,
    };
    if let Err(e) = new_product.validate() {
        return Err(errors::domain_error_to_response(e));
    }
    Ok(new_product)
}

pub fn to_product_update(req: UpdateProductRequest) -> Result<ProductUpdate, axum::response::Response> {
    let update = ProductUpdate {
        name: req.name,
        sku: req.sku,
        description: req.description,
        quantity: req.quantity,
        min_stock_level: req.min_stock_level,
        category: req.category,
        location: req.location,
        price: parse_price(req.price)?,
    };
    if let Err(e) = update.validate() {
        return Err(errors::domain_error_to_response(e));
    }
    Ok(update)
}

pub fn to_new_category(req: CreateCategoryRequest) -> Result<NewCategory, axum::response::Response> {
    let new_category = NewCategory {
        name: req.name,
        description: req.description,
    };
    if let Err(e) = new_category.validate() {
        return Err(errors::domain_error_to_response(e));
    }
    Ok(new_category)
}

pub fn to_category_update(req: UpdateCategoryRequest) -> Result<CategoryUpdate, axum::response::Response> {
    let update = CategoryUpdate {
        name: req.name,
        description: req.description,
    };
    if let Err(e) = update.validate() {
        return Err(errors::domain_error_to_response(e));
    }
    Ok(update)
}

pub fn to_new_location(req: CreateLocationRequest) -> Result<NewLocation, axum::response::Response> {
    let new_location = NewLocation {
        zone: req.zone,
        shelf: req.shelf,
        bin: req.bin,
    };
    if let Err(e) = new_location.validate() {
        return Err(errors::domain_error_to_response(e));
    }
    Ok(new_location)
}

pub fn to_location_update(req: UpdateLocationRequest) -> Result<LocationUpdate, axum::response::Response> {
    let update = LocationUpdate {
        zone: req.zone,
        shelf: req.shelf,
        bin: req.bin,
    };
    if let Err(e) = update.validate() {
        return Err(errors::domain_error_to_response(e));
    }
    Ok(update)
}

/// Quantity is validated by the store, not here.
pub fn to_new_movement(req: RecordMovementRequest) -> Result<NewMovement, axum::response::Response> {
    let product_id: ProductId = match req.product_id.parse() {
        Ok(id) => id,
        Err(e) => return Err(errors::domain_error_to_response(e)),
    };
    let movement_type = errors::parse_movement_type(&req.movement_type)?;

    Ok(NewMovement {
        product_id,
        movement_type,
        quantity: req.quantity,
        notes: req.notes,
    })
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn product_to_json(product: Product) -> serde_json::Value {
    serde_json::json!({
        "id": product.id.to_string(),
        "name": product.name,
        "sku": product.sku,
        "description": product.description,
        "quantity": product.quantity,
        "min_stock_level": product.min_stock_level,
        "category": product.category,
        "location": product.location,
        "price": product.price.map(|p| p.to_string()),
    })
}

pub fn category_to_json(category: Category) -> serde_json::Value {
    serde_json::json!({
        "id": category.id.to_string(),
        "name": category.name,
        "description": category.description,
    })
}

pub fn location_to_json(location: Location) -> serde_json::Value {
    serde_json::json!({
        "id": location.id.to_string(),
        "display_key": location.display_key(),
        "zone": location.zone,
        "shelf": location.shelf,
        "bin": location.bin,
    })
}

pub fn movement_to_json(movement: StockMovement) -> serde_json::Value {
    serde_json::json!({
        "id": movement.id.to_string(),
        "product_id": movement.product_id.to_string(),
        "product_name": movement.product_name,
        "product_sku": movement.product_sku,
        "type": movement.movement_type.as_str(),
        "quantity": movement.quantity,
        "notes": movement.notes,
        "timestamp": movement.timestamp.to_rfc3339(),
    })
}
