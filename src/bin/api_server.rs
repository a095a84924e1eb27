// src/bin/api_server.rs

use capability_rest::domain::generic::Repository;
use capability_rest::domain::Pet;
use capability_rest::infra::{config, logging};
use capability_rest::transport;
use capability_rest::MemoryRepository;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init();

    let bind_addr = config::bind_addr()?;
    let max_body_bytes = config::max_body_bytes()?;

    // --- Storage Initialization ---
    let pets: Arc<dyn Repository<Pet>> = Arc::new(MemoryRepository::<Pet>::new());
    tracing::info!("initialized in-memory pet repository");

    let app_state = transport::http::AppState {
        pets,
        max_body_bytes,
    };

    // --- API Server Initialization ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state).layer(cors);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!(%bind_addr, max_body_bytes, "API server listening");

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received");
        }
    }

    Ok(())
}
