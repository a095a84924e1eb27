use crate::domain::generic::{JsonReadOnlyResource, Repository};
use crate::domain::resource::Resource;
use crate::domain::Pet;
use crate::transport::http::endpoint::Endpoint;
use axum::http::request::Parts;
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub pets: usize,
}

/// `/health`: read-only status document.
pub struct HealthEndpoint {
    pets: Arc<dyn Repository<Pet>>,
}

impl HealthEndpoint {
    pub fn new(pets: Arc<dyn Repository<Pet>>) -> Self {
        Self { pets }
    }
}

impl Endpoint for HealthEndpoint {
    fn resource(&self, _request: &Parts) -> Option<Box<dyn Resource>> {
        Some(Box::new(JsonReadOnlyResource::new(HealthStatus {
            status: "ok",
            pets: self.pets.list().len(),
        })))
    }
}
