use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use super::password::{hash_password, verify_password, PasswordError};

/// User record in the `users` collection.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,                   // assigned by the store, token subject
    pub username: String,           // unique
    pub email: String,
    pub password_hash: String,      // Argon2 PHC string
    pub created_at: OffsetDateTime,
}

impl User {
    pub fn check_password(&self, plain: &str) -> Result<(), PasswordError> {
        verify_password(plain, &self.password_hash)
    }
}

/// A user that has not been persisted yet.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    /// Builds the record to insert, hashing `password` on the way.
    pub fn with_password(username: String, email: String, password: &str) -> Result<Self, PasswordError> {
        Ok(Self {
            username,
            email,
            password_hash: hash_password(password)?,
        })
    }
}
