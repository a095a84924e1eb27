pub mod dispatcher;
pub mod endpoint;
pub mod router;
pub mod translator;
pub mod types;
pub mod handlers {
    pub mod health;
    pub mod pets;
}

pub use endpoint::{endpoint_route, serve, Endpoint};
pub use router::create_router;
pub use types::AppState;
