//! Domain models with validation at construction
//!
//! User input is validated before it reaches the store.
//! Invalid input returns ValidationError, not panic.

pub mod person;
pub mod validation;

pub use person::{Address, NewPerson, Person, PersonPatch, DRINKING_AGE};
pub use validation::ValidationError;
