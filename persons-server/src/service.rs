//! PersonService - one method per operation, each a fixed sequence of store calls
//!
//! Sequences are not wrapped in a transaction. In particular the duplicate
//! pre-check in [`PersonService::add`] is a separate read before the insert,
//! so two concurrent adds with the same key can both succeed.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::db::{MemoryPersonStore, PersonStore};
use crate::error::{ServiceError, ServiceResult};
use crate::models::{NewPerson, Person, PersonPatch};

/// Which field `add` checks for an existing row before inserting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UniquePolicy {
    /// No pre-check
    None,
    #[default]
    Name,
    Mail,
}

impl fmt::Display for UniquePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UniquePolicy::None => write!(f, "none"),
            UniquePolicy::Name => write!(f, "name"),
            UniquePolicy::Mail => write!(f, "mail"),
        }
    }
}

impl FromStr for UniquePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(UniquePolicy::None),
            "name" => Ok(UniquePolicy::Name),
            "mail" => Ok(UniquePolicy::Mail),
            _ => Err(format!("Unknown unique field: {} (expected name, mail or none)", s)),
        }
    }
}

impl UniquePolicy {
    /// Field name and value to pre-check for this insert, if any.
    fn key<'a>(&self, person: &'a NewPerson) -> Option<(&'static str, &'a str)> {
        match self {
            UniquePolicy::None => None,
            UniquePolicy::Name => Some(("name", person.name.as_str())),
            UniquePolicy::Mail => person.mail.as_deref().map(|mail| ("mail", mail)),
        }
    }
}

/// CRUD operations over the persons table
///
/// Cheap to clone; every clone shares the same store.
#[derive(Clone)]
pub struct PersonService {
    store: Arc<dyn PersonStore>,
    policy: UniquePolicy,
}

impl PersonService {
    pub fn new(store: Arc<dyn PersonStore>, policy: UniquePolicy) -> Self {
        Self { store, policy }
    }

    /// Service over a fresh [`MemoryPersonStore`].
    pub fn in_memory(policy: UniquePolicy) -> Self {
        Self::new(Arc::new(MemoryPersonStore::new()), policy)
    }

    pub fn policy(&self) -> UniquePolicy {
        self.policy
    }

    pub async fn count(&self) -> ServiceResult<i64> {
        Ok(self.store.count().await?)
    }

    /// All persons in storage order. Each call re-queries.
    pub async fn list(&self) -> ServiceResult<Vec<Person>> {
        Ok(self.store.all().await?)
    }

    pub async fn find_by_id(&self, id: i32) -> ServiceResult<Option<Person>> {
        Ok(self.store.by_id(id).await?)
    }

    pub async fn find_by_name(&self, name: &str) -> ServiceResult<Option<Person>> {
        Ok(self.store.by_name(name).await?)
    }

    pub async fn find_by_mail(&self, mail: &str) -> ServiceResult<Option<Person>> {
        Ok(self.store.by_mail(mail).await?)
    }

    /// Person whose mail and password equal the inputs exactly.
    ///
    /// Plaintext comparison, no rate limiting. A real system must hash
    /// credentials instead.
    pub async fn login(&self, mail: &str, password: &str) -> ServiceResult<Option<Person>> {
        let person = self.store.by_credentials(mail, password).await?;
        tracing::debug!(mail, matched = person.is_some(), "login attempt");
        Ok(person)
    }

    /// Validate, pre-check uniqueness, insert, then read the row back.
    pub async fn add(&self, person: NewPerson) -> ServiceResult<Option<Person>> {
        person.validate()?;

        if let Some((field, value)) = self.policy.key(&person) {
            let existing = match self.policy {
                UniquePolicy::Mail => self.store.by_mail(value).await?,
                _ => self.store.by_name(value).await?,
            };
            if existing.is_some() {
                tracing::info!(field, value, "rejecting duplicate person");
                return Err(ServiceError::Duplicate {
                    field,
                    value: value.to_owned(),
                });
            }
        }

        let id = self.store.insert(&person).await?;
        tracing::debug!(id, name = %person.name, "person added");
        Ok(self.store.by_id(id).await?)
    }

    /// Merge `patch` over the current row and write the whole row back.
    ///
    /// Returns `Ok(None)` when no row has this id. Falsy patch values keep
    /// the stored value; see [`PersonPatch::apply`].
    pub async fn edit(&self, id: i32, patch: PersonPatch) -> ServiceResult<Option<Person>> {
        let Some(current) = self.store.by_id(id).await? else {
            return Ok(None);
        };

        let updated = patch.apply(&current)?;
        self.store.update(id, &updated).await?;
        tracing::debug!(id, "person updated");
        Ok(self.store.by_id(id).await?)
    }

    /// Read the row, delete it, and return what was read.
    pub async fn delete_by_id(&self, id: i32) -> ServiceResult<Option<Person>> {
        let Some(person) = self.store.by_id(id).await? else {
            return Ok(None);
        };

        let removed = self.store.delete(id).await?;
        tracing::debug!(id, removed, "person deleted");
        Ok(Some(person))
    }

    /// Read every row, delete every row, and return what was read.
    pub async fn delete_all(&self) -> ServiceResult<Vec<Person>> {
        let persons = self.store.all().await?;
        let removed = self.store.delete_all().await?;
        tracing::debug!(removed, "all persons deleted");
        Ok(persons)
    }
}
