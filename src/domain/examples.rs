use super::generic::Persistable;
use super::resource::FieldErrors;
use serde::{Deserialize, Serialize};

/// Pets older than this fail validation.
pub const MAX_PET_AGE: u32 = 10;

/// Example persistable model served by the demo API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub age: u32,
}

impl Pet {
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
        }
    }
}

impl Persistable for Pet {
    fn key(&self) -> String {
        self.id.clone()
    }

    // A full replace keeps the pet addressed by the same id.
    fn reset(&mut self) {
        *self = Pet {
            id: std::mem::take(&mut self.id),
            ..Pet::default()
        };
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.id.trim().is_empty() {
            errors.add("id", "Required");
        }
        if self.age > MAX_PET_AGE {
            errors.add("age", "Too old");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_old_pet_is_rejected() {
        let errors = Pet::new("foo", "jinx", 25).validate().unwrap_err();
        assert_eq!(errors.to_string(), r#"{"age":"Too old"}"#);
    }

    #[test]
    fn pet_at_max_age_is_valid() {
        assert!(Pet::new("foo", "jinx", MAX_PET_AGE).validate().is_ok());
    }

    #[test]
    fn reset_keeps_id() {
        let mut pet = Pet::new("bar", "buck", 5);
        pet.reset();
        assert_eq!(pet, Pet::new("bar", "", 0));
    }
}
