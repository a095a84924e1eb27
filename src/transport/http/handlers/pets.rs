use crate::domain::generic::{JsonListResource, JsonResource, Repository};
use crate::domain::resource::Resource;
use crate::domain::Pet;
use crate::transport::http::endpoint::Endpoint;
use axum::http::request::Parts;
use std::sync::Arc;

/// `/pets`: the whole collection; POST creates a pet.
pub struct PetListEndpoint {
    pets: Arc<dyn Repository<Pet>>,
}

impl PetListEndpoint {
    pub fn new(pets: Arc<dyn Repository<Pet>>) -> Self {
        Self { pets }
    }
}

impl Endpoint for PetListEndpoint {
    fn resource(&self, _request: &Parts) -> Option<Box<dyn Resource>> {
        Some(Box::new(JsonListResource::new(
            self.pets.list(),
            Arc::clone(&self.pets),
        )))
    }
}

/// `/pets/{id}`: a single pet, looked up by the last path segment.
pub struct PetEndpoint {
    pets: Arc<dyn Repository<Pet>>,
}

impl PetEndpoint {
    pub fn new(pets: Arc<dyn Repository<Pet>>) -> Self {
        Self { pets }
    }
}

impl Endpoint for PetEndpoint {
    fn resource(&self, request: &Parts) -> Option<Box<dyn Resource>> {
        let id = request
            .uri
            .path()
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|id| !id.is_empty())?;
        let pet = self.pets.lookup(id)?;
        Some(Box::new(JsonResource::new(pet, Arc::clone(&self.pets))))
    }
}
