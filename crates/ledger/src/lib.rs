//! Stock movement ledger.
//!
//! This crate contains the business rules for moving stock in and out of the
//! warehouse, implemented purely as deterministic domain logic (no IO, no
//! HTTP, no storage). The store commits what [`plan_movement`] decides.

pub mod movement;

pub use movement::{plan_movement, MovementType, NewMovement, StockMovement};
