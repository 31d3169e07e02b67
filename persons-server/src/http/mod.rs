//! HTTP server layer
//!
//! Axum server with:
//! - REST listing at `/persons`
//! - GraphQL at `/graphql` (GraphiQL on GET)
//! - CORS (localhost only by default)
//! - Request tracing
//! - Graceful shutdown

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerError};
