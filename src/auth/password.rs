use argon2::{
    password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    /// The password does not match the stored hash.
    #[error("password mismatch")]
    Mismatch,

    #[error("stored password hash is unusable: {0}")]
    CorruptHash(password_hash::Error),

    #[error("password hashing failed: {0}")]
    Hashing(password_hash::Error),
}

/// Argon2id with a fresh random salt, encoded as a PHC string.
pub fn hash_password(plain: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(PasswordError::Hashing)
}

pub fn verify_password(plain: &str, stored: &str) -> Result<(), PasswordError> {
    let parsed = PasswordHash::new(stored).map_err(PasswordError::CorruptHash)?;
    match Argon2::default().verify_password(plain.as_bytes(), &parsed) {
        Ok(()) => Ok(()),
        Err(password_hash::Error::Password) => Err(PasswordError::Mismatch),
        Err(e) => Err(PasswordError::CorruptHash(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_password_verifies() {
        let hash = hash_password("Secur3P@ssw0rd!").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("Secur3P@ssw0rd!", &hash).is_ok());
    }

    #[test]
    fn wrong_password_is_a_mismatch() {
        let hash = hash_password("correct-horse-1!").unwrap();
        let err = verify_password("wrong-horse-1!", &hash).unwrap_err();
        assert!(matches!(err, PasswordError::Mismatch));
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        let a = hash_password("repeat-me-1!").unwrap();
        let b = hash_password("repeat-me-1!").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn unparseable_hash_is_corrupt_not_mismatch() {
        let err = verify_password("anything", "not-a-valid-hash").unwrap_err();
        assert!(matches!(err, PasswordError::CorruptHash(_)));
    }
}
