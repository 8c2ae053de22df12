use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::auth::repo_types::{NewUser, User};

#[derive(Debug, Error)]
pub enum InsertUserError {
    #[error("username already exists")]
    Duplicate,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// The `users` collection.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<User>>;
    async fn insert(&self, user: NewUser) -> Result<User, InsertUserError>;
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
    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn insert(&self, user: NewUser) -> Result<User, InsertUserError> {
        let res = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, email, password_hash, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&self.db)
        .await;

        match res {
            Ok(u) => Ok(u),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(InsertUserError::Duplicate),
            Err(e) => Err(InsertUserError::Other(e.into())),
        }
    }
}

#[cfg(test)]
pub mod memory {
    use std::sync::Mutex;

    use time::OffsetDateTime;

    use super::*;

    #[derive(Default)]
    pub struct MemoryUserStore {
        users: Mutex<Vec<User>>,
        pub fail: bool,
    }

    impl MemoryUserStore {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        pub fn all(&self) -> Vec<User> {
            self.users.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl UserStore for MemoryUserStore {
        async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<User>> {
            if self.fail {
                anyhow::bail!("store unavailable");
            }
            let users = self.users.lock().unwrap();
            Ok(users.iter().find(|u| u.username == username).cloned())
        }

        async fn insert(&self, user: NewUser) -> Result<User, InsertUserError> {
            if self.fail {
                return Err(anyhow::anyhow!("store unavailable").into());
            }
            let mut users = self.users.lock().unwrap();
            if users.iter().any(|u| u.username == user.username) {
                return Err(InsertUserError::Duplicate);
            }
            let stored = User {
                id: Uuid::new_v4(),
                username: user.username,
                email: user.email,
                password_hash: user.password_hash,
                created_at: OffsetDateTime::now_utc(),
            };
            users.push(stored.clone());
            Ok(stored)
        }
    }
}
