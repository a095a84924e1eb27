//! Resource contracts, generic adapters and the example domain.

pub mod examples;
pub mod generic;
pub mod resource;

pub use examples::Pet;
