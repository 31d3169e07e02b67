//! GraphQL schema for persons
//!
//! `PersonService` is injected as schema data; resolvers are thin wrappers
//! that parse arguments, call one service operation and shape the result.

mod error;
mod resolvers;
mod types;

use async_graphql::{EmptySubscription, Schema};

use crate::service::PersonService;

pub use resolvers::{MutationRoot, QueryRoot};
pub use types::{AddressNode, PersonNode};

pub type PersonSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the executable schema around a service.
pub fn build_schema(service: PersonService) -> PersonSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(service)
        .finish()
}

/// Schema definition language, rendered without any backing store.
pub fn sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}
