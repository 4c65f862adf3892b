use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use stockroom_core::LocationId;
use stockroom_store::InventoryStore;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_location).get(list_locations))
        .route("/:id", get(get_location).patch(update_location).delete(delete_location))
}

pub async fn create_location(
    Extension(store): Extension<Arc<InventoryStore>>,
    errors::ApiJson(body): errors::ApiJson<dto::CreateLocationRequest>,
) -> axum::response::Response {
    let new_location = match dto::to_new_location(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let location = store.create_location(new_location);
    (StatusCode::CREATED, Json(dto::location_to_json(location))).into_response()
}

pub async fn list_locations(
    Extension(store): Extension<Arc<InventoryStore>>,
) -> axum::response::Response {
    let items = store
        .list_locations()
        .into_iter()
        .map(dto::location_to_json)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn get_location(
    Extension(store): Extension<Arc<InventoryStore>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let location_id: LocationId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid location id"),
    };

    match store.get_location(location_id) {
        Some(location) => (StatusCode::OK, Json(dto::location_to_json(location))).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "location not found"),
    }
}

pub async fn update_location(
    Extension(store): Extension<Arc<InventoryStore>>,
    Path(id): Path<String>,
    errors::ApiJson(body): errors::ApiJson<dto::UpdateLocationRequest>,
) -> axum::response::Response {
    let location_id: LocationId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid location id"),
    };
    let update = match dto::to_location_update(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match store.update_location(location_id, update) {
        Some(location) => (StatusCode::OK, Json(dto::location_to_json(location))).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "location not found"),
    }
}

pub async fn delete_location(
    Extension(store): Extension<Arc<InventoryStore>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let location_id: LocationId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid location id"),
    };

    if store.delete_location(location_id) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        errors::json_error(StatusCode::NOT_FOUND, "not_found", "location not found")
    }
}
