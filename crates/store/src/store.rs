//! The in-memory inventory store.

use stockroom_catalog::{
    Category, CategoryUpdate, Location, LocationUpdate, NewCategory, NewLocation, NewProduct,
    Product, ProductUpdate,
};
use stockroom_core::{CategoryId, DomainResult, LocationId, ProductId};
use stockroom_ledger::{plan_movement, NewMovement, StockMovement};

use crate::map::EntityMap;

/// Single owner of all inventory state, one keyed map per entity type.
///
/// Share it as `Arc<InventoryStore>`; it lives from process start (optionally
/// seeded) to process end. Each map sits behind its own `RwLock` and every
/// operation takes at most one write lock, so writers on the same entity type
/// are serialized. Nothing stronger is provided: no transactions, no
/// durability, no cross-map locking.
#[derive(Debug)]
pub struct InventoryStore {
    products: EntityMap<Product>,
    categories: EntityMap<Category>,
    locations: EntityMap<Location>,
    movements: EntityMap<StockMovement>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self {
            products: EntityMap::new(),
            categories: EntityMap::new(),
            locations: EntityMap::new(),
            movements: EntityMap::new(),
        }
    }

    pub fn list_products(&self) -> Vec<Product> {
        self.products.list()
    }

    pub fn get_product(&self, id: ProductId) -> Option<Product> {
        self.products.get(&id)
    }

    /// Store a product from validated input, assigning a fresh id.
    pub fn create_product(&self, new: NewProduct) -> Product {
        let product = Product {
            id: ProductId::new(),
            name: new.name,
            sku: new.sku,
            description: new.description,
            quantity: new.quantity,
            min_stock_level: new.min_stock_level,
            category: new.category,
            location: new.location,
            price: new.price,
        };
        self.products.insert(product.clone());
        product
    }

    /// Merge a partial update over the stored product; `None` when unknown.
    pub fn update_product(&self, id: ProductId, update: ProductUpdate) -> Option<Product> {
        self.products.update(&id, |product| product.apply_update(update))
    }

    /// Remove a product. Its movement history stays in the ledger.
    pub fn delete_product(&self, id: ProductId) -> bool {
        self.products.remove(&id)
    }

    pub fn list_categories(&self) -> Vec<Category> {
        self.categories.list()
    }

    pub fn get_category(&self, id: CategoryId) -> Option<Category> {
        self.categories.get(&id)
    }

    /// Store a category from validated input, assigning a fresh id.
    pub fn create_category(&self, new: NewCategory) -> Category {
        let category = Category {
            id: CategoryId::new(),
            name: new.name,
            description: new.description,
        };
        self.categories.insert(category.clone());
        category
    }

    pub fn update_category(&self, id: CategoryId, update: CategoryUpdate) -> Option<Category> {
        self.categories.update(&id, |category| category.apply_update(update))
    }

    /// Remove a category. Products keep their category string as-is.
    pub fn delete_category(&self, id: CategoryId) -> bool {
        self.categories.remove(&id)
    }

    pub fn list_locations(&self) -> Vec<Location> {
        self.locations.list()
    }

    pub fn get_location(&self, id: LocationId) -> Option<Location> {
        self.locations.get(&id)
    }

    /// Store a location from validated input, assigning a fresh id.
    pub fn create_location(&self, new: NewLocation) -> Location {
        let location = Location {
            id: LocationId::new(),
            zone: new.zone,
            shelf: new.shelf,
            bin: new.bin,
        };
        self.locations.insert(location.clone());
        location
    }

    pub fn update_location(&self, id: LocationId, update: LocationUpdate) -> Option<Location> {
        self.locations.update(&id, |location| location.apply_update(update))
    }

    /// Remove a location. Products keep their location string as-is.
    pub fn delete_location(&self, id: LocationId) -> bool {
        self.locations.remove(&id)
    }

    /// All recorded movements, newest first.
    pub fn list_movements(&self) -> Vec<StockMovement> {
        let mut movements = self.movements.list();
        movements.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        movements
    }

    /// Record a stock movement and adjust the product's quantity.
    ///
    /// The quantity check and the quantity write happen under the same
    /// products write lock, so no interleaving can drive stock negative. On
    /// any failure nothing is written: no movement is appended and no
    /// quantity changes.
    pub fn record_movement(&self, request: NewMovement) -> DomainResult<StockMovement> {
        if let Err(e) = request.validate() {
            tracing::warn!("rejected movement for product {}: {e}", request.product_id);
            return Err(e);
        }

        let planned = self.products.try_update(&request.product_id, |product| {
            let (movement, new_quantity) = plan_movement(product, &request)?;
            product.quantity = new_quantity;
            Ok(movement)
        });

        match planned {
            Ok(movement) => {
                self.movements.insert(movement.clone());
                tracing::info!(
                    "recorded {} movement of {} units for product {}",
                    movement.movement_type.as_str(),
                    movement.quantity,
                    movement.product_id
                );
                Ok(movement)
            }
            Err(e) => {
                tracing::warn!("rejected movement for product {}: {e}", request.product_id);
                Err(e)
            }
        }
    }

    /// Insert a pre-built movement record without touching product state.
    ///
    /// Seeding only: historical records keep their original timestamps, and
    /// the seeded product quantities already account for them.
    pub(crate) fn insert_movement(&self, movement: StockMovement) {
        self.movements.insert(movement);
    }

    /// Products at or below their minimum stock level.
    pub fn low_stock_alerts(&self) -> Vec<Product> {
        self.products
            .list()
            .into_iter()
            .filter(|p| p.is_low_stock())
            .collect()
    }
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}
