//! Error values produced by capability implementations.
//!
//! `FieldErrors` is the structured validation failure; it serializes exactly like a
//! success payload so the translator can return it as a JSON body. Everything else a
//! capability can fail with collapses into `ResourceError::Generic`.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// A set of validation failures, keyed by field name.
///
/// Serializes to a JSON object mapping field -> message (`{}` when empty).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for `field`. A later message for the same field replaces the earlier one.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(())` when nothing was recorded, otherwise the set itself as the error.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// JSON rendering used for response bodies.
    pub fn to_json_bytes(&self) -> Vec<u8> {
        // A string -> string map cannot fail to serialize.
        serde_json::to_vec(&self.errors).unwrap_or_else(|_| b"{}".to_vec())
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.to_json_bytes()))
    }
}

impl std::error::Error for FieldErrors {}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut errors = FieldErrors::new();
        for (field, message) in iter {
            errors.add(field, message);
        }
        errors
    }
}

/// The closed set of failures a capability can report.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// Field-addressable validation failure; rendered as a JSON body.
    #[error("{0}")]
    Validation(FieldErrors),
    /// Anything else (malformed body, storage failure, ...); rendered as plain text.
    #[error("{0}")]
    Generic(String),
}

impl ResourceError {
    pub fn generic(message: impl Into<String>) -> Self {
        ResourceError::Generic(message.into())
    }
}

impl From<FieldErrors> for ResourceError {
    fn from(errors: FieldErrors) -> Self {
        ResourceError::Validation(errors)
    }
}

impl From<serde_json::Error> for ResourceError {
    fn from(err: serde_json::Error) -> Self {
        ResourceError::Generic(err.to_string())
    }
}
