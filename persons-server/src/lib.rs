//! persons-server: CRUD over a single `persons` table
//!
//! Exposes one REST listing and a GraphQL API whose queries and mutations
//! map almost one-to-one onto SQL statements.

pub mod config;
pub mod db;
pub mod error;
pub mod graphql;
pub mod http;
pub mod models;
pub mod service;

pub use config::Settings;
pub use error::{ServiceError, ServiceResult};
pub use service::{PersonService, UniquePolicy};
