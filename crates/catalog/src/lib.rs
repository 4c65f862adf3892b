//! Catalog domain module: products, categories, and storage locations.
//!
//! This crate contains the catalog's record types and field validation,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod category;
pub mod location;
pub mod price;
pub mod product;

pub use category::{Category, CategoryUpdate, NewCategory};
pub use location::{Location, LocationUpdate, NewLocation};
pub use price::Price;
pub use product::{NewProduct, Product, ProductUpdate};
