//! In-memory inventory store: entity maps, the movement write path,
//! reporting scans, and demo seed data.

mod map;
pub mod reporting;
pub mod seed;
pub mod store;

pub use reporting::{CategoryStats, InventoryReport, LocationStats};
pub use seed::seed_demo_data;
pub use store::InventoryStore;
