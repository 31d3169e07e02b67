//! Person store trait - the SQL primitives the service is built from

use async_trait::async_trait;

use crate::models::{NewPerson, Person};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Storage for the `persons` table (testable)
///
/// Each method is a single statement. Nothing here checks uniqueness or
/// wraps several statements together.
#[async_trait]
pub trait PersonStore: Send + Sync {
    async fn count(&self) -> Result<i64, DbError>;

    /// Every row, in whatever order the storage yields them.
    async fn all(&self) -> Result<Vec<Person>, DbError>;

    async fn by_id(&self, id: i32) -> Result<Option<Person>, DbError>;

    /// First row with this exact name.
    async fn by_name(&self, name: &str) -> Result<Option<Person>, DbError>;

    /// First row with this exact mail.
    async fn by_mail(&self, mail: &str) -> Result<Option<Person>, DbError>;

    /// First row whose mail and password both equal the inputs.
    async fn by_credentials(&self, mail: &str, password: &str)
        -> Result<Option<Person>, DbError>;

    /// Insert a row and return the generated id.
    async fn insert(&self, person: &NewPerson) -> Result<i32, DbError>;

    /// Overwrite every writable column of row `id`. Returns rows affected.
    async fn update(&self, id: i32, person: &NewPerson) -> Result<u64, DbError>;

    /// Returns rows affected; zero when the row is already gone.
    async fn delete(&self, id: i32) -> Result<u64, DbError>;

    async fn delete_all(&self) -> Result<u64, DbError>;
}
