use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use stockroom_core::ProductId;
use stockroom_store::InventoryStore;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_product).get(list_products))
        .route("/:id", get(get_product).patch(update_product).delete(delete_product))
}

pub async fn create_product(
    Extension(store): Extension<Arc<InventoryStore>>,
    errors::ApiJson(body): errors::ApiJson<dto::CreateProductRequest>,
) -> axum::response::Response {
    let new_product = match dto::to_new_product(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let product = store.create_product(new_product);
    (StatusCode::CREATED, Json(dto::product_to_json(product))).into_response()
}

pub async fn list_products(
    Extension(store): Extension<Arc<InventoryStore>>,
) -> axum::response::Response {
    let items = store
        .list_products()
        .into_iter()
        .map(dto::product_to_json)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn get_product(
    Extension(store): Extension<Arc<InventoryStore>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let product_id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id"),
    };

    match store.get_product(product_id) {
        Some(product) => (StatusCode::OK, Json(dto::product_to_json(product))).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found"),
    }
}

pub async fn update_product(
    Extension(store): Extension<Arc<InventoryStore>>,
    Path(id): Path<String>,
    errors::ApiJson(body): errors::ApiJson<dto::UpdateProductRequest>,
) -> axum::response::Response {
    let product_id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id"),
    };
    let update = match dto::to_product_update(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match store.update_product(product_id, update) {
        Some(product) => (StatusCode::OK, Json(dto::product_to_json(product))).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found"),
    }
}

pub async fn delete_product(
    Extension(store): Extension<Arc<InventoryStore>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let product_id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id"),
    };

    if store.delete_product(product_id) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found")
    }
}
