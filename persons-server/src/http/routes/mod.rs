//! Route handlers organized by surface

pub mod graphql;
pub mod health;
pub mod persons;
