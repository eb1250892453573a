use std::collections::BTreeMap;

use axum::async_trait;
use tokio::sync::Mutex;

use crate::users::{repo::UserStore, repo_types::User};

#[derive(Debug, Clone)]
struct StoredUser {
    user: User,
    password: Vec<u8>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, StoredUser>,
}

/// In-process `UserStore`. Ids start at 1 and are never reused, like a
/// `BIGSERIAL` column.
#[derive(Default)]
pub struct MemoryUserStore {
    inner: Mutex<Inner>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw bytes held in the password column for `id`.
    pub async fn password_of(&self, id: i64) -> Option<Vec<u8>> {
        let inner = self.inner.lock().await;
        inner.rows.get(&id).map(|row| row.password.clone())
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list_users(&self) -> anyhow::Result<Vec<User>> {
        let inner = self.inner.lock().await;
        Ok(inner.rows.values().map(|row| row.user.clone()).collect())
    }

    async fn get_user(&self, id: i64) -> anyhow::Result<Option<User>> {
        let inner = self.inner.lock().await;
        Ok(inner.rows.get(&id).map(|row| row.user.clone()))
    }

    async fn insert_user(&self, name: &str, email: &str, password: &[u8]) -> anyhow::Result<i64> {
        let mut inner = self.inner.lock().await;
        inner.next_id += 1;
        let id = inner.next_id;
        inner.rows.insert(
            id,
            StoredUser {
                user: User {
                    id,
                    name: name.to_string(),
                    email: email.to_string(),
                },
                password: password.to_vec(),
            },
        );
        Ok(id)
    }

    async fn update_user(
        &self,
        id: i64,
        name: &str,
        email: &str,
        password: &[u8],
    ) -> anyhow::Result<u64> {
        let mut inner = self.inner.lock().await;
        let Some(row) = inner.rows.get_mut(&id) else {
            return Ok(0);
        };
        row.user.name = name.to_string();
        row.user.email = email.to_string();
        row.password = password.to_vec();
        Ok(1)
    }

    async fn delete_user(&self, id: i64) -> anyhow::Result<u64> {
        let mut inner = self.inner.lock().await;
        Ok(inner.rows.remove(&id).map_or(0, |_| 1))
    }
}
