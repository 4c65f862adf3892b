//! Movement records and the pure decision that guards stock levels.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_catalog::Product;
use stockroom_core::{DomainError, DomainResult, Entity, MovementId, ProductId};

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    In,
    Out,
}

impl MovementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
        }
    }
}

/// One recorded stock-in or stock-out.
///
/// Movements are append-only history: never edited, never deleted, and they
/// outlive the product they were recorded against. Product name and SKU are
/// stamped in at recording time so later renames do not rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockMovement {
    pub id: MovementId,
    pub product_id: ProductId,
    pub product_name: String,
    pub product_sku: String,
    pub movement_type: MovementType,
    pub quantity: i64,
    pub notes: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl Entity for StockMovement {
    type Id = MovementId;

    fn id(&self) -> &MovementId {
        &self.id
    }
}

/// Request to record a movement against a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMovement {
    pub product_id: ProductId,
    pub movement_type: MovementType,
    pub quantity: i64,
    pub notes: Option<String>,
}

impl NewMovement {
    pub fn validate(&self) -> DomainResult<()> {
        if self.quantity < 1 {
            return Err(DomainError::validation("quantity must be a positive integer"));
        }
        Ok(())
    }
}

/// Decide whether `request` may be applied to `product`.
///
/// Pure: touches no state. On success returns the stamped movement record
/// plus the product's new quantity for the caller to commit together. An
/// outgoing movement asking for more than the units on hand fails with
/// [`DomainError::InsufficientStock`], which is what keeps product quantity
/// from ever going negative; an incoming movement that would overflow the
/// quantity counter fails validation.
pub fn plan_movement(
    product: &Product,
    request: &NewMovement,
) -> DomainResult<(StockMovement, i64)> {
    request.validate()?;

    let new_quantity = match request.movement_type {
        MovementType::In => product
            .quantity
            .checked_add(request.quantity)
            .ok_or_else(|| DomainError::validation("stock level would overflow"))?,
        MovementType::Out => {
            if request.quantity > product.quantity {
                return Err(DomainError::insufficient_stock(
                    request.quantity,
                    product.quantity,
                ));
            }
            product.quantity - request.quantity
        }
    };

    let movement = StockMovement {
        id: MovementId::new(),
        product_id: product.id,
        product_name: product.name.clone(),
        product_sku: product.sku.clone(),
        movement_type: request.movement_type,
        quantity: request.quantity,
        notes: request.notes.clone(),
        timestamp: Utc::now(),
    };

    Ok((movement, new_quantity))
}
