//! HTTP API application wiring (Axum router + store wiring).
//!
//! If you're new to Rust, this folder is structured like:
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use stockroom_store::InventoryStore;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(store: Arc<InventoryStore>) -> Router {
    let api = routes::router().layer(Extension(store));

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", api)
        .layer(ServiceBuilder::new())
}
