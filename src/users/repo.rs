use anyhow::Context;
use axum::async_trait;
use sqlx::PgPool;

use crate::users::repo_types::User;

/// Access to the `users` table. Each call is a single autocommitted statement.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn list_users(&self) -> anyhow::Result<Vec<User>>;
    async fn get_user(&self, id: i64) -> anyhow::Result<Option<User>>;
    /// Returns the id assigned by the store.
    async fn insert_user(&self, name: &str, email: &str, password: &[u8]) -> anyhow::Result<i64>;
    /// Returns the number of rows affected.
    async fn update_user(
        &self,
        id: i64,
        name: &str,
        email: &str,
        password: &[u8],
    ) -> anyhow::Result<u64>;
    /// Returns the number of rows affected.
    async fn delete_user(&self, id: i64) -> anyhow::Result<u64>;
}

#[derive(Clone)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list_users(&self) -> anyhow::Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email
            FROM users
            "#,
        )
        .fetch_all(&self.db)
        .await
        .context("list users")?;
        Ok(users)
    }

    async fn get_user(&self, id: i64) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .context("get user")?;
        Ok(user)
    }

    async fn insert_user(&self, name: &str, email: &str, password: &[u8]) -> anyhow::Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password)
        .fetch_one(&self.db)
        .await
        .context("insert user")?;
        Ok(id)
    }

    async fn update_user(
        &self,
        id: i64,
        name: &str,
        email: &str,
        password: &[u8],
    ) -> anyhow::Result<u64> {
        let res = sqlx::query(
            r#"
            UPDATE users
               SET name = $1, email = $2, password = $3
             WHERE id = $4
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password)
        .bind(id)
        .execute(&self.db)
        .await
        .context("update user")?;
        Ok(res.rows_affected())
    }

    async fn delete_user(&self, id: i64) -> anyhow::Result<u64> {
        let res = sqlx::query(r#"DELETE FROM users WHERE id = $1"#)
            .bind(id)
            .execute(&self.db)
            .await
            .context("delete user")?;
        Ok(res.rows_affected())
    }
}
