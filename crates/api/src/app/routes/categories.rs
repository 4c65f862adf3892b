use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use stockroom_core::CategoryId;
use stockroom_store::InventoryStore;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_category).get(list_categories))
        .route("/:id", get(get_category).patch(update_category).delete(delete_category))
}

pub async fn create_category(
    Extension(store): Extension<Arc<InventoryStore>>,
    errors::ApiJson(body): errors::ApiJson<dto::CreateCategoryRequest>,
) -> axum::response::Response {
    let new_category = match dto::to_new_category(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let category = store.create_category(new_category);
    (StatusCode::CREATED, Json(dto::category_to_json(category))).into_response()
}

pub async fn list_categories(
    Extension(store): Extension<Arc<InventoryStore>>,
) -> axum::response::Response {
    let items = store
        .list_categories()
        .into_iter()
        .map(dto::category_to_json)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn get_category(
    Extension(store): Extension<Arc<InventoryStore>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let category_id: CategoryId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid category id"),
    };

    match store.get_category(category_id) {
        Some(category) => (StatusCode::OK, Json(dto::category_to_json(category))).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "category not found"),
    }
}

pub async fn update_category(
    Extension(store): Extension<Arc<InventoryStore>>,
    Path(id): Path<String>,
    errors::ApiJson(body): errors::ApiJson<dto::UpdateCategoryRequest>,
) -> axum::response::Response {
    let category_id: CategoryId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid category id"),
    };
    let update = match dto::to_category_update(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match store.update_category(category_id, update) {
        Some(category) => (StatusCode::OK, Json(dto::category_to_json(category))).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "category not found"),
    }
}

pub async fn delete_category(
    Extension(store): Extension<Arc<InventoryStore>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let category_id: CategoryId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid category id"),
    };

    if store.delete_category(category_id) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        errors::json_error(StatusCode::NOT_FOUND, "not_found", "category not found")
    }
}
