use axum::Router;

pub mod categories;
pub mod locations;
pub mod movements;
pub mod products;
pub mod reports;
pub mod system;

/// Router for all inventory endpoints (mounted under `/api`).
pub fn router() -> Router {
    Router::new()
        .nest("/products", products::router())
        .nest("/categories", categories::router())
        .nest("/locations", locations::router())
        .nest("/movements", movements::router())
        .merge(reports::router())
}
