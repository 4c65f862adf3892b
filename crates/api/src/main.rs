use std::sync::Arc;

use stockroom_store::InventoryStore;

#[tokio::main]
async fn main() {
    stockroom_observability::init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let seed = std::env::var("SEED_DEMO_DATA")
        .map(|v| v.parse::<bool>().unwrap_or(true))
        .unwrap_or(true);

    let store = Arc::new(InventoryStore::new());
    if seed {
        stockroom_store::seed_demo_data(&store);
        tracing::info!("seeded demo inventory");
    }

    let app = stockroom_api::app::build_app(store);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("failed to bind listen address");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
