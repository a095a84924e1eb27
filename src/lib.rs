pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use domain::generic::{
    Codec, Factory, JsonCodec, JsonListResource, JsonReadOnlyListResource, JsonReadOnlyResource,
    JsonResource, Persistable, Repository,
};
pub use domain::resource::{
    Creatable, Deletable, FieldErrors, PartialUpdatable, Readable, Resource, ResourceError,
    Updatable,
};
pub use storage::MemoryRepository;
pub use transport::http::{endpoint_route, serve, Endpoint};
