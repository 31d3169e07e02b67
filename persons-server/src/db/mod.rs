//! Database layer - connection pool and person stores
//!
//! # Design Principles
//!
//! - One process-wide pool handle, passed into the store; no global state
//! - One SQL statement per store method; sequencing lives in the service
//! - Parameterized queries only

#[cfg(test)]
pub(crate) mod failing;
pub mod memory;
pub mod pool;
pub mod postgres;
pub mod store;

pub use memory::MemoryPersonStore;
pub use pool::create_pool;
pub use postgres::PgPersonStore;
pub use store::{DbError, PersonStore};
