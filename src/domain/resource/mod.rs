//! Resource and capability contracts.
//!
//! A resource only declares a content type. The HTTP verbs it answers are decided by which
//! capability accessors it overrides: each accessor defaults to `None`, so a resource that
//! overrides none of them answers every verb with 405.

pub mod errors;

pub use errors::{FieldErrors, ResourceError};

/// A REST resource resolved for a single request.
pub trait Resource: Send {
    /// MIME type used for every success body this resource produces.
    fn content_type(&self) -> &str;

    /// GET support.
    fn as_readable(&self) -> Option<&dyn Readable> {
        None
    }

    /// POST support.
    fn as_creatable(&mut self) -> Option<&mut dyn Creatable> {
        None
    }

    /// PUT support.
    fn as_updatable(&mut self) -> Option<&mut dyn Updatable> {
        None
    }

    /// PATCH support.
    fn as_partial_updatable(&mut self) -> Option<&mut dyn PartialUpdatable> {
        None
    }

    /// DELETE support.
    fn as_deletable(&mut self) -> Option<&mut dyn Deletable> {
        None
    }
}

/// Serializes the resource in the format named by its content type.
pub trait Readable: Send + Sync {
    fn read(&self) -> Result<Vec<u8>, ResourceError>;
}

/// Creates a new object from a request body and hands it back so it can be read.
pub trait Creatable: Send {
    fn create(&mut self, body: &[u8]) -> Result<Box<dyn Readable>, ResourceError>;
}

/// Replaces the object entirely with the request body.
pub trait Updatable: Send {
    fn update(&mut self, body: &[u8]) -> Result<(), ResourceError>;
}

/// Merges the request body into the object.
pub trait PartialUpdatable: Send {
    fn partial_update(&mut self, body: &[u8]) -> Result<(), ResourceError>;
}

pub trait Deletable: Send {
    fn delete(&mut self) -> Result<(), ResourceError>;
}
