use crate::domain::generic::Repository;
use crate::domain::Pet;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pets: Arc<dyn Repository<Pet>>,
    /// Upper bound on request bodies read by endpoint routes.
    pub max_body_bytes: usize,
}
