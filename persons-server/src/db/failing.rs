//! Store whose every call fails, for exercising error paths

use async_trait::async_trait;

use super::store::{DbError, PersonStore};
use crate::models::{NewPerson, Person};

/// Every method returns a pool timeout.
pub struct FailingStore;

fn timed_out<T>() -> Result<T, DbError> {
    Err(sqlx::Error::PoolTimedOut.into())
}

#[async_trait]
impl PersonStore for FailingStore {
    async fn count(&self) -> Result<i64, DbError> {
        timed_out()
    }
    async fn all(&self) -> Result<Vec<Person>, DbError> {
        timed_out()
    }
    async fn by_id(&self, _: i32) -> Result<Option<Person>, DbError> {
        timed_out()
    }
    async fn by_name(&self, _: &str) -> Result<Option<Person>, DbError> {
        timed_out()
    }
    async fn by_mail(&self, _: &str) -> Result<Option<Person>, DbError> {
        timed_out()
    }
    async fn by_credentials(&self, _: &str, _: &str) -> Result<Option<Person>, DbError> {
        timed_out()
    }
    async fn insert(&self, _: &NewPerson) -> Result<i32, DbError> {
        timed_out()
    }
    async fn update(&self, _: i32, _: &NewPerson) -> Result<u64, DbError> {
        timed_out()
    }
    async fn delete(&self, _: i32) -> Result<u64, DbError> {
        timed_out()
    }
    async fn delete_all(&self) -> Result<u64, DbError> {
        timed_out()
    }
}
