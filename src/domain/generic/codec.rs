//! Body codecs used by the generic resource adapters.

use crate::domain::resource::ResourceError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value as JsonValue;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Encodes values to bytes and decodes bodies back, either fresh or onto an existing value.
pub trait Codec: Send + Sync {
    fn content_type(&self) -> &'static str;

    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, ResourceError>;

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ResourceError>;

    /// Decodes `data` onto `target`: fields present in the body change, the rest are kept.
    /// Fields the codec never serializes (e.g. `#[serde(skip)]`) come back as their defaults.
    fn decode_onto<T: Serialize + DeserializeOwned>(
        &self,
        data: &[u8],
        target: &mut T,
    ) -> Result<(), ResourceError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn content_type(&self) -> &'static str {
        JSON_CONTENT_TYPE
    }

    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, ResourceError> {
        Ok(serde_json::to_vec(value)?)
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ResourceError> {
        Ok(serde_json::from_slice(data)?)
    }

    fn decode_onto<T: Serialize + DeserializeOwned>(
        &self,
        data: &[u8],
        target: &mut T,
    ) -> Result<(), ResourceError> {
        let patch: JsonValue = serde_json::from_slice(data)?;
        let mut current = serde_json::to_value(&*target)?;
        merge_json(&mut current, patch);
        *target = serde_json::from_value(current)?;
        Ok(())
    }
}

/// Merges `patch` into `target`. Objects merge key by key (recursively); any other value
/// replaces what was there.
pub fn merge_json(target: &mut JsonValue, patch: JsonValue) {
    match (target, patch) {
        (JsonValue::Object(current), JsonValue::Object(patch)) => {
            for (key, value) in patch {
                match current.get_mut(&key) {
                    Some(existing) => merge_json(existing, value),
                    None => {
                        current.insert(key, value);
                    }
                }
            }
        }
        (target, patch) => *target = patch,
    }
}
