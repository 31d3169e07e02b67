//! GraphQL output types

use async_graphql::{Object, SimpleObject, ID};

use crate::models::{Address, Person};

/// `Person` as exposed over GraphQL. The password column is never readable.
pub struct PersonNode(pub Person);

impl From<Person> for PersonNode {
    fn from(person: Person) -> Self {
        Self(person)
    }
}

#[Object(name = "Person")]
impl PersonNode {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn age(&self) -> Option<i32> {
        self.0.age
    }

    async fn phone(&self) -> Option<&str> {
        self.0.phone.as_deref()
    }

    async fn mail(&self) -> Option<&str> {
        self.0.mail.as_deref()
    }

    /// Street and city, or null when neither is known
    async fn address(&self) -> Option<AddressNode> {
        self.0.address().map(AddressNode::from)
    }

    /// True from age 18
    async fn can_drink(&self) -> bool {
        self.0.can_drink()
    }
}

#[derive(SimpleObject)]
#[graphql(name = "Address")]
pub struct AddressNode {
    pub street: Option<String>,
    pub city: Option<String>,
}

impl From<Address> for AddressNode {
    fn from(address: Address) -> Self {
        Self {
            street: address.street,
            city: address.city,
        }
    }
}
