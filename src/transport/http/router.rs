use crate::transport::http::endpoint::endpoint_route;
use crate::transport::http::handlers::{health, pets};
use crate::transport::http::types::AppState;
use axum::Router;
use std::sync::Arc;

pub fn create_router(app_state: AppState) -> Router {
    let limit = app_state.max_body_bytes;
    Router::new()
        .route(
            "/health",
            endpoint_route(health::HealthEndpoint::new(Arc::clone(&app_state.pets)), limit),
        )
        .route(
            "/pets",
            endpoint_route(pets::PetListEndpoint::new(Arc::clone(&app_state.pets)), limit),
        )
        .route(
            "/pets/:id",
            endpoint_route(pets::PetEndpoint::new(Arc::clone(&app_state.pets)), limit),
        )
}
