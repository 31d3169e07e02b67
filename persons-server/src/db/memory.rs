//! In-process person store
//!
//! Backs `persons serve --in-memory` and the service/GraphQL/HTTP tests.
//! Rows keep insertion order; ids count up from 1 and are never reused.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{DbError, PersonStore};
use crate::models::{NewPerson, Person};

#[derive(Default)]
struct Table {
    rows: Vec<Person>,
    last_id: i32,
}

/// Person store held in memory
#[derive(Default)]
pub struct MemoryPersonStore {
    table: RwLock<Table>,
}

impl MemoryPersonStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PersonStore for MemoryPersonStore {
    async fn count(&self) -> Result<i64, DbError> {
        Ok(self.table.read().await.rows.len() as i64)
    }

    async fn all(&self) -> Result<Vec<Person>, DbError> {
        Ok(self.table.read().await.rows.clone())
    }

    async fn by_id(&self, id: i32) -> Result<Option<Person>, DbError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|p| p.id == id).cloned())
    }

    async fn by_name(&self, name: &str) -> Result<Option<Person>, DbError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|p| p.name == name).cloned())
    }

    async fn by_mail(&self, mail: &str) -> Result<Option<Person>, DbError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .iter()
            .find(|p| p.mail.as_deref() == Some(mail))
            .cloned())
    }

    async fn by_credentials(
        &self,
        mail: &str,
        password: &str,
    ) -> Result<Option<Person>, DbError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .iter()
            .find(|p| p.mail.as_deref() == Some(mail) && p.password.as_deref() == Some(password))
            .cloned())
    }

    async fn insert(&self, person: &NewPerson) -> Result<i32, DbError> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let id = table.last_id;
        table.rows.push(Person {
            id,
            name: person.name.clone(),
            age: person.age,
            phone: person.phone.clone(),
            street: person.street.clone(),
            city: person.city.clone(),
            mail: person.mail.clone(),
            password: person.password.clone(),
        });
        Ok(id)
    }

    async fn update(&self, id: i32, person: &NewPerson) -> Result<u64, DbError> {
        let mut table = self.table.write().await;
        let Some(row) = table.rows.iter_mut().find(|p| p.id == id) else {
            return Ok(0);
        };
        row.name = person.name.clone();
        row.age = person.age;
        row.phone = person.phone.clone();
        row.street = person.street.clone();
        row.city = person.city.clone();
        row.mail = person.mail.clone();
        row.password = person.password.clone();
        Ok(1)
    }

    async fn delete(&self, id: i32) -> Result<u64, DbError> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|p| p.id != id);
        Ok((before - table.rows.len()) as u64)
    }

    async fn delete_all(&self) -> Result<u64, DbError> {
        let mut table = self.table.write().await;
        let removed = table.rows.len() as u64;
        table.rows.clear();
        Ok(removed)
    }
}
