use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use stockroom_store::InventoryStore;

use crate::app::dto;

pub fn router() -> Router {
    Router::new()
        .route("/reports", get(inventory_report))
        .route("/alerts/low-stock", get(low_stock_alerts))
}

/// Aggregated on demand; nothing is cached between calls.
pub async fn inventory_report(
    Extension(store): Extension<Arc<InventoryStore>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(store.reporting())).into_response()
}

pub async fn low_stock_alerts(
    Extension(store): Extension<Arc<InventoryStore>>,
) -> axum::response::Response {
    let items = store
        .low_stock_alerts()
        .into_iter()
        .map(dto::product_to_json)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}
