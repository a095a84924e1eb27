//! Verb -> capability selection.
//!
//! `select` maps a request method to the one capability that answers it and binds that
//! capability of the resource into an [`Operation`]. Running an operation yields an owned
//! [`Outcome`], which ends the borrow of the resource so the translator can read it again.

use crate::domain::resource::{
    Creatable, Deletable, PartialUpdatable, Readable, Resource, ResourceError, Updatable,
};
use axum::http::Method;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Read,
    Create,
    Update,
    PartialUpdate,
    Delete,
}

impl Capability {
    /// The capability a method requires. OPTIONS and unknown methods have none.
    pub fn for_method(method: &Method) -> Option<Self> {
        match method.as_str() {
            "GET" => Some(Capability::Read),
            "POST" => Some(Capability::Create),
            "PUT" => Some(Capability::Update),
            "PATCH" => Some(Capability::PartialUpdate),
            "DELETE" => Some(Capability::Delete),
            _ => None,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Capability::Read => "read",
            Capability::Create => "create",
            Capability::Update => "update",
            Capability::PartialUpdate => "partial_update",
            Capability::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// A capability of one resource, bound and ready to run.
pub enum Operation<'r> {
    Read(&'r dyn Readable),
    Create(&'r mut dyn Creatable),
    Update(&'r mut dyn Updatable),
    PartialUpdate(&'r mut dyn PartialUpdatable),
    Delete(&'r mut dyn Deletable),
}

/// What running an operation produced.
pub enum Outcome {
    Read(Result<Vec<u8>, ResourceError>),
    Created(Result<Box<dyn Readable>, ResourceError>),
    Mutated(Result<(), ResourceError>),
    Deleted(Result<(), ResourceError>),
}

/// Binds the capability `method` needs, or `None` when the resource lacks it (405).
///
/// The resource is borrowed mutably only so mutating capabilities can be handed out;
/// selection itself never changes it.
pub fn select<'r, R>(resource: &'r mut R, method: &Method) -> Option<Operation<'r>>
where
    R: Resource + ?Sized,
{
    match Capability::for_method(method)? {
        Capability::Read => resource.as_readable().map(Operation::Read),
        Capability::Create => resource.as_creatable().map(Operation::Create),
        Capability::Update => resource.as_updatable().map(Operation::Update),
        Capability::PartialUpdate => resource
            .as_partial_updatable()
            .map(Operation::PartialUpdate),
        Capability::Delete => resource.as_deletable().map(Operation::Delete),
    }
}

impl Operation<'_> {
    pub fn capability(&self) -> Capability {
        match self {
            Operation::Read(_) => Capability::Read,
            Operation::Create(_) => Capability::Create,
            Operation::Update(_) => Capability::Update,
            Operation::PartialUpdate(_) => Capability::PartialUpdate,
            Operation::Delete(_) => Capability::Delete,
        }
    }

    /// Whether the request body must be read before running.
    pub fn needs_body(&self) -> bool {
        matches!(
            self,
            Operation::Create(_) | Operation::Update(_) | Operation::PartialUpdate(_)
        )
    }

    pub fn run(self, body: &[u8]) -> Outcome {
        match self {
            Operation::Read(readable) => Outcome::Read(readable.read()),
            Operation::Create(creatable) => Outcome::Created(creatable.create(body)),
            Operation::Update(updatable) => Outcome::Mutated(updatable.update(body)),
            Operation::PartialUpdate(updatable) => {
                Outcome::Mutated(updatable.partial_update(body))
            }
            Operation::Delete(deletable) => Outcome::Deleted(deletable.delete()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_METHODS: [&str; 7] = ["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS", "PURGE"];

    struct Bare;

    impl Resource for Bare {
        fn content_type(&self) -> &str {
            "text/plain"
        }
    }

    struct Counter {
        value: u32,
    }

    impl Readable for Counter {
        fn read(&self) -> Result<Vec<u8>, ResourceError> {
            Ok(self.value.to_string().into_bytes())
        }
    }

    impl Deletable for Counter {
        fn delete(&mut self) -> Result<(), ResourceError> {
            self.value = 0;
            Ok(())
        }
    }

    impl Resource for Counter {
        fn content_type(&self) -> &str {
            "text/plain"
        }

        fn as_readable(&self) -> Option<&dyn Readable> {
            Some(self)
        }

        fn as_deletable(&mut self) -> Option<&mut dyn Deletable> {
            Some(self)
        }
    }

    fn method(name: &str) -> Method {
        Method::from_bytes(name.as_bytes()).unwrap()
    }

    #[test]
    fn methods_map_to_one_capability() {
        assert_eq!(Capability::for_method(&Method::GET), Some(Capability::Read));
        assert_eq!(Capability::for_method(&Method::POST), Some(Capability::Create));
        assert_eq!(Capability::for_method(&Method::PUT), Some(Capability::Update));
        assert_eq!(
            Capability::for_method(&Method::PATCH),
            Some(Capability::PartialUpdate)
        );
        assert_eq!(Capability::for_method(&Method::DELETE), Some(Capability::Delete));
        assert_eq!(Capability::for_method(&Method::OPTIONS), None);
        assert_eq!(Capability::for_method(&method("PURGE")), None);
    }

    #[test]
    fn resource_without_capabilities_answers_nothing() {
        let mut resource = Bare;
        for name in ALL_METHODS {
            assert!(select(&mut resource, &method(name)).is_none(), "{name}");
        }
    }

    #[test]
    fn only_declared_capabilities_are_selected() {
        let mut resource = Counter { value: 3 };
        let selected: Vec<Capability> = ALL_METHODS
            .iter()
            .filter_map(|name| select(&mut resource, &method(name)).map(|op| op.capability()))
            .collect();
        assert_eq!(selected, vec![Capability::Read, Capability::Delete]);
    }

    #[test]
    fn selection_does_not_mutate() {
        let mut resource = Counter { value: 3 };
        for name in ALL_METHODS {
            let _ = select(&mut resource, &method(name));
        }
        assert_eq!(resource.value, 3);
    }

    #[test]
    fn run_invokes_bound_capability() {
        let mut resource = Counter { value: 3 };

        let read = select(&mut resource, &Method::GET).unwrap();
        assert!(!read.needs_body());
        match read.run(b"") {
            Outcome::Read(Ok(bytes)) => assert_eq!(bytes, b"3"),
            _ => panic!("expected read outcome"),
        }

        let delete = select(&mut resource, &Method::DELETE).unwrap();
        assert!(matches!(delete.run(b""), Outcome::Deleted(Ok(()))));
        assert_eq!(resource.value, 0);
    }
}
