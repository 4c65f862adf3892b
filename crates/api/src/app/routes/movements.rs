use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use stockroom_store::InventoryStore;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/", post(record_movement).get(list_movements))
}

pub async fn record_movement(
    Extension(store): Extension<Arc<InventoryStore>>,
    errors::ApiJson(body): errors::ApiJson<dto::RecordMovementRequest>,
) -> axum::response::Response {
    let request = match dto::to_new_movement(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match store.record_movement(request) {
        Ok(movement) => (StatusCode::CREATED, Json(dto::movement_to_json(movement))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_movements(
    Extension(store): Extension<Arc<InventoryStore>>,
) -> axum::response::Response {
    let items = store
        .list_movements()
        .into_iter()
        .map(dto::movement_to_json)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}
