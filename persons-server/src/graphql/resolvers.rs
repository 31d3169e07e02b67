//! Query and mutation roots

use async_graphql::{Context, ErrorExtensions, Object, Result, ID};

use super::types::PersonNode;
use crate::error::ServiceError;
use crate::models::{NewPerson, Person, PersonPatch, ValidationError};
use crate::service::PersonService;

fn service<'a>(ctx: &Context<'a>) -> Result<&'a PersonService> {
    ctx.data::<PersonService>()
}

/// Ids are integers in storage; anything else matches no row.
fn parse_id(id: &ID) -> Option<i32> {
    id.parse().ok()
}

fn node(person: Option<Person>) -> Option<PersonNode> {
    person.map(PersonNode::from)
}

fn nodes(persons: Vec<Person>) -> Vec<PersonNode> {
    persons.into_iter().map(PersonNode::from).collect()
}

#[derive(Default)]
pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    async fn person_count(&self, ctx: &Context<'_>) -> Result<i64> {
        service(ctx)?.count().await.map_err(|e| e.extend())
    }

    async fn all_persons(&self, ctx: &Context<'_>) -> Result<Vec<PersonNode>> {
        let persons = service(ctx)?.list().await.map_err(|e| e.extend())?;
        Ok(nodes(persons))
    }

    /// Look up by id, else name, else mail. Null when nothing matches.
    async fn find_person(
        &self,
        ctx: &Context<'_>,
        id: Option<ID>,
        name: Option<String>,
        mail: Option<String>,
    ) -> Result<Option<PersonNode>> {
        let service = service(ctx)?;
        let found = match (id, name, mail) {
            (Some(id), _, _) => match parse_id(&id) {
                Some(id) => service.find_by_id(id).await,
                None => Ok(None),
            },
            (None, Some(name), _) => service.find_by_name(&name).await,
            (None, None, Some(mail)) => service.find_by_mail(&mail).await,
            (None, None, None) => Err(ServiceError::from(ValidationError::MissingKey {
                operation: "findPerson",
            })),
        };
        Ok(node(found.map_err(|e| e.extend())?))
    }

    /// Plaintext credential check. Null on mismatch.
    async fn login(
        &self,
        ctx: &Context<'_>,
        mail: String,
        password: String,
    ) -> Result<Option<PersonNode>> {
        let person = service(ctx)?
            .login(&mail, &password)
            .await
            .map_err(|e| e.extend())?;
        Ok(node(person))
    }
}

#[derive(Default)]
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    #[allow(clippy::too_many_arguments)]
    async fn add_person(
        &self,
        ctx: &Context<'_>,
        name: String,
        age: Option<i32>,
        phone: Option<String>,
        street: Option<String>,
        city: Option<String>,
        mail: Option<String>,
        password: Option<String>,
    ) -> Result<Option<PersonNode>> {
        let new = NewPerson {
            name,
            age,
            phone,
            street,
            city,
            mail,
            password,
        };
        let person = service(ctx)?.add(new).await.map_err(|e| e.extend())?;
        Ok(node(person))
    }

    /// Empty strings and zero count as "not provided" and keep the stored value.
    #[allow(clippy::too_many_arguments)]
    async fn edit_person(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: Option<String>,
        age: Option<i32>,
        phone: Option<String>,
        street: Option<String>,
        city: Option<String>,
        mail: Option<String>,
        password: Option<String>,
    ) -> Result<Option<PersonNode>> {
        let Some(id) = parse_id(&id) else {
            return Ok(None);
        };
        let patch = PersonPatch {
            name,
            age,
            phone,
            street,
            city,
            mail,
            password,
        };
        let person = service(ctx)?.edit(id, patch).await.map_err(|e| e.extend())?;
        Ok(node(person))
    }

    async fn delete_person(&self, ctx: &Context<'_>, id: ID) -> Result<Option<PersonNode>> {
        let Some(id) = parse_id(&id) else {
            return Ok(None);
        };
        let person = service(ctx)?
            .delete_by_id(id)
            .await
            .map_err(|e| e.extend())?;
        Ok(node(person))
    }

    async fn delete_all_persons(&self, ctx: &Context<'_>) -> Result<Vec<PersonNode>> {
        let persons = service(ctx)?.delete_all().await.map_err(|e| e.extend())?;
        Ok(nodes(persons))
    }
}
