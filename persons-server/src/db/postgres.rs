//! PostgreSQL person store
//!
//! Plain parameterized statements against `persons` (see `sql/persons.sql`).
//! No ORDER BY on scans: rows come back in the table's natural order.

use async_trait::async_trait;
use sqlx::PgPool;

use super::store::{DbError, PersonStore};
use crate::models::{NewPerson, Person};

const COLUMNS: &str = "id, name, age, phone, street, city, mail, password";

/// Person store backed by a shared PgPool
#[derive(Clone)]
pub struct PgPersonStore {
    pool: PgPool,
}

impl PgPersonStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PersonStore for PgPersonStore {
    async fn count(&self) -> Result<i64, DbError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM persons")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn all(&self) -> Result<Vec<Person>, DbError> {
        let rows = sqlx::query_as::<_, Person>(&format!("SELECT {COLUMNS} FROM persons"))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn by_id(&self, id: i32) -> Result<Option<Person>, DbError> {
        let row =
            sqlx::query_as::<_, Person>(&format!("SELECT {COLUMNS} FROM persons WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row)
    }

    async fn by_name(&self, name: &str) -> Result<Option<Person>, DbError> {
        let row = sqlx::query_as::<_, Person>(&format!(
            "SELECT {COLUMNS} FROM persons WHERE name = $1 LIMIT 1"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn by_mail(&self, mail: &str) -> Result<Option<Person>, DbError> {
        let row = sqlx::query_as::<_, Person>(&format!(
            "SELECT {COLUMNS} FROM persons WHERE mail = $1 LIMIT 1"
        ))
        .bind(mail)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn by_credentials(
        &self,
        mail: &str,
        password: &str,
    ) -> Result<Option<Person>, DbError> {
        // Plaintext equality on purpose; see DESIGN.md
        let row = sqlx::query_as::<_, Person>(&format!(
            "SELECT {COLUMNS} FROM persons WHERE mail = $1 AND password = $2 LIMIT 1"
        ))
        .bind(mail)
        .bind(password)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert(&self, person: &NewPerson) -> Result<i32, DbError> {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO persons (name, age, phone, street, city, mail, password)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&person.name)
        .bind(person.age)
        .bind(&person.phone)
        .bind(&person.street)
        .bind(&person.city)
        .bind(&person.mail)
        .bind(&person.password)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn update(&self, id: i32, person: &NewPerson) -> Result<u64, DbError> {
        let result = sqlx::query(
            r#"
            UPDATE persons
            SET name = $1, age = $2, phone = $3, street = $4,
                city = $5, mail = $6, password = $7
            WHERE id = $8
            "#,
        )
        .bind(&person.name)
        .bind(person.age)
        .bind(&person.phone)
        .bind(&person.street)
        .bind(&person.city)
        .bind(&person.mail)
        .bind(&person.password)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM persons WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete_all(&self) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM persons")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::db::create_pool;

    // Integration tests - run with DATABASE_URL set against a database
    // provisioned with sql/persons.sql:
    // cargo test -p persons-server -- --ignored --test-threads=1

    async fn store() -> PgPersonStore {
        let config = DatabaseConfig {
            url: Some(std::env::var("DATABASE_URL").expect("DATABASE_URL required")),
            ..Default::default()
        };
        let store = PgPersonStore::new(create_pool(&config).await.expect("pool creation failed"));
        store.delete_all().await.expect("cleanup failed");
        store
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_then_read_back() {
        let store = store().await;
        let id = store
            .insert(&NewPerson {
                name: "Alice".into(),
                age: Some(25),
                city: Some("Helsinki".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        let person = store.by_id(id).await.unwrap().expect("row missing");
        assert_eq!(person.name, "Alice");
        assert_eq!(person.age, Some(25));
        assert_eq!(person.city.as_deref(), Some("Helsinki"));
        assert_eq!(person.phone, None);
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn credentials_must_both_match() {
        let store = store().await;
        store
            .insert(&NewPerson {
                name: "Carol".into(),
                mail: Some("a@x.com".into()),
                password: Some("p1".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(store.by_credentials("a@x.com", "wrong").await.unwrap().is_none());
        assert!(store.by_credentials("a@x.com", "p1").await.unwrap().is_some());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_missing_row_is_noop() {
        let store = store().await;
        assert_eq!(store.delete(i32::MAX).await.unwrap(), 0);
        assert_eq!(store.delete_all().await.unwrap(), 0);
    }
}
