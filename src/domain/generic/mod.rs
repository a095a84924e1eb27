//! Generic resource adapters.
//!
//! These let any serde-encodable domain object act as a REST resource without writing
//! dispatch glue: wrap one object in a [`JsonResource`], or a collection in a
//! [`JsonListResource`], and hand it a [`Repository`] to persist through.

pub mod codec;

pub use codec::{Codec, JsonCodec, JSON_CONTENT_TYPE};

use crate::domain::resource::{
    Creatable, Deletable, FieldErrors, PartialUpdatable, Readable, Resource, ResourceError,
    Updatable,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// A domain object the generic adapters can decode onto, validate and persist.
pub trait Persistable: Serialize + DeserializeOwned + Default + Send + Sync + 'static {
    /// Storage key of this object.
    fn key(&self) -> String;

    /// Puts the object back into its zero state before a full replace.
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn validate(&self) -> Result<(), FieldErrors>;
}

/// Storage for persistable objects.
///
/// Implementations are shared between concurrent requests and must be safe for concurrent
/// use. Nothing above this layer serializes writes, so the last save for a key wins unless
/// the implementation imposes something stronger.
pub trait Repository<P>: Send + Sync {
    fn lookup(&self, key: &str) -> Option<P>;

    fn list(&self) -> Vec<P>;

    fn save(&self, object: &P) -> Result<(), ResourceError>;

    fn remove(&self, key: &str) -> Result<(), ResourceError>;
}

/// Produces the default object a POST body is decoded onto.
pub trait Factory<P>: Send + Sync {
    fn create(&self) -> P;
}

impl<P, F> Factory<P> for F
where
    F: Fn() -> P + Send + Sync,
{
    fn create(&self) -> P {
        self()
    }
}

/// A single persistable object exposed as a readable, updatable and deletable resource.
pub struct JsonResource<P, C = JsonCodec> {
    object: P,
    repository: Arc<dyn Repository<P>>,
    codec: C,
}

impl<P: Persistable> JsonResource<P> {
    pub fn new(object: P, repository: Arc<dyn Repository<P>>) -> Self {
        Self::with_codec(object, repository, JsonCodec)
    }
}

impl<P: Persistable, C: Codec> JsonResource<P, C> {
    pub fn with_codec(object: P, repository: Arc<dyn Repository<P>>, codec: C) -> Self {
        Self {
            object,
            repository,
            codec,
        }
    }

    pub fn object(&self) -> &P {
        &self.object
    }

    pub fn into_inner(self) -> P {
        self.object
    }
}

impl<P: Persistable, C: Codec> Readable for JsonResource<P, C> {
    fn read(&self) -> Result<Vec<u8>, ResourceError> {
        self.codec.encode(&self.object)
    }
}

impl<P: Persistable, C: Codec> Updatable for JsonResource<P, C> {
    fn update(&mut self, body: &[u8]) -> Result<(), ResourceError> {
        self.object.reset();
        self.partial_update(body)
    }
}

impl<P: Persistable, C: Codec> PartialUpdatable for JsonResource<P, C> {
    fn partial_update(&mut self, body: &[u8]) -> Result<(), ResourceError> {
        self.codec.decode_onto(body, &mut self.object)?;
        self.object.validate()?;
        self.repository.save(&self.object)
    }
}

impl<P: Persistable, C: Codec> Deletable for JsonResource<P, C> {
    fn delete(&mut self) -> Result<(), ResourceError> {
        self.repository.remove(&self.object.key())
    }
}

impl<P: Persistable, C: Codec> Resource for JsonResource<P, C> {
    fn content_type(&self) -> &str {
        self.codec.content_type()
    }

    fn as_readable(&self) -> Option<&dyn Readable> {
        Some(self)
    }

    fn as_updatable(&mut self) -> Option<&mut dyn Updatable> {
        Some(self)
    }

    fn as_partial_updatable(&mut self) -> Option<&mut dyn PartialUpdatable> {
        Some(self)
    }

    fn as_deletable(&mut self) -> Option<&mut dyn Deletable> {
        Some(self)
    }
}

/// A collection of persistable objects: GET renders the whole list, POST creates a new member.
pub struct JsonListResource<P, C = JsonCodec> {
    objects: Vec<P>,
    factory: Box<dyn Factory<P>>,
    repository: Arc<dyn Repository<P>>,
    codec: C,
}

impl<P: Persistable> JsonListResource<P> {
    /// New members start from `P::default()`.
    pub fn new(objects: Vec<P>, repository: Arc<dyn Repository<P>>) -> Self {
        Self::with_factory(objects, P::default, repository)
    }

    pub fn with_factory(
        objects: Vec<P>,
        factory: impl Factory<P> + 'static,
        repository: Arc<dyn Repository<P>>,
    ) -> Self {
        Self {
            objects,
            factory: Box::new(factory),
            repository,
            codec: JsonCodec,
        }
    }
}

impl<P: Persistable, C: Codec> JsonListResource<P, C> {
    pub fn codec<D: Codec>(self, codec: D) -> JsonListResource<P, D> {
        JsonListResource {
            objects: self.objects,
            factory: self.factory,
            repository: self.repository,
            codec,
        }
    }

    pub fn objects(&self) -> &[P] {
        &self.objects
    }
}

impl<P: Persistable, C: Codec> Readable for JsonListResource<P, C> {
    fn read(&self) -> Result<Vec<u8>, ResourceError> {
        self.codec.encode(&self.objects)
    }
}

impl<P: Persistable, C: Codec + Clone + 'static> Creatable for JsonListResource<P, C> {
    fn create(&mut self, body: &[u8]) -> Result<Box<dyn Readable>, ResourceError> {
        let mut object = self.factory.create();
        self.codec.decode_onto(body, &mut object)?;
        object.validate()?;
        self.repository.save(&object)?;
        Ok(Box::new(JsonResource::with_codec(
            object,
            Arc::clone(&self.repository),
            self.codec.clone(),
        )))
    }
}

impl<P: Persistable, C: Codec + Clone + 'static> Resource for JsonListResource<P, C> {
    fn content_type(&self) -> &str {
        self.codec.content_type()
    }

    fn as_readable(&self) -> Option<&dyn Readable> {
        Some(self)
    }

    fn as_creatable(&mut self) -> Option<&mut dyn Creatable> {
        Some(self)
    }
}

/// Renders any serializable value for GET and answers nothing else.
pub struct JsonReadOnlyResource<T> {
    object: T,
}

impl<T: Serialize + Send + Sync> JsonReadOnlyResource<T> {
    pub fn new(object: T) -> Self {
        Self { object }
    }
}

impl<T: Serialize + Send + Sync> Readable for JsonReadOnlyResource<T> {
    fn read(&self) -> Result<Vec<u8>, ResourceError> {
        JsonCodec.encode(&self.object)
    }
}

impl<T: Serialize + Send + Sync> Resource for JsonReadOnlyResource<T> {
    fn content_type(&self) -> &str {
        JSON_CONTENT_TYPE
    }

    fn as_readable(&self) -> Option<&dyn Readable> {
        Some(self)
    }
}

/// Renders a list of serializable values for GET and answers nothing else.
pub struct JsonReadOnlyListResource<T> {
    objects: Vec<T>,
}

impl<T: Serialize + Send + Sync> JsonReadOnlyListResource<T> {
    pub fn new(objects: Vec<T>) -> Self {
        Self { objects }
    }
}

impl<T: Serialize + Send + Sync> Readable for JsonReadOnlyListResource<T> {
    fn read(&self) -> Result<Vec<u8>, ResourceError> {
        JsonCodec.encode(&self.objects)
    }
}

impl<T: Serialize + Send + Sync> Resource for JsonReadOnlyListResource<T> {
    fn content_type(&self) -> &str {
        JSON_CONTENT_TYPE
    }

    fn as_readable(&self) -> Option<&dyn Readable> {
        Some(self)
    }
}
