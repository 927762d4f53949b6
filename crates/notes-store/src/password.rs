//! Password hashing with Argon2id.
//!
//! Hashes are PHC-format strings (`$argon2id$v=19$m=19456,t=2,p=1$...`) with a
//! random per-password salt. Verification goes through Argon2's own verify
//! step; hashes are never compared as strings.
//!
//! Argon2 is deliberately slow. The `*_blocking` variants move the work onto
//! tokio's blocking pool so request workers are not stalled.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::error::{StoreError, StoreResult};

/// Hash a password using Argon2id. Returns a PHC-format string.
pub fn hash_password(password: &str) -> StoreResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| StoreError::PasswordHash(format!("failed to hash password: {}", e)))
}

/// Verify a password against a PHC-format hash.
///
/// Returns `Ok(false)` on mismatch and `Err` only if `hash` is malformed.
pub fn verify_password(password: &str, hash: &str) -> StoreResult<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| StoreError::PasswordHash(format!("invalid password hash: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// [`hash_password`] on the blocking thread pool.
pub async fn hash_password_blocking(password: String) -> StoreResult<String> {
    tokio::task::spawn_blocking(move || hash_password(&password)).await?
}

/// [`verify_password`] on the blocking thread pool.
pub async fn verify_password_blocking(password: String, hash: String) -> StoreResult<bool> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash)).await?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_password() {
        let password = "test_password_123";
        let hash = hash_password(password).unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password(password, &hash).unwrap());
        assert!(!verify_password("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_hash_is_salted() {
        let a = hash_password("same").unwrap();
        let b = hash_password("same").unwrap();
        assert_ne!(a, b);
        assert!(verify_password("same", &a).unwrap());
        assert!(verify_password("same", &b).unwrap());
    }

    #[test]
    fn test_hash_never_contains_plaintext() {
        let hash = hash_password("hunter2hunter2").unwrap();
        assert!(!hash.contains("hunter2hunter2"));
    }

    #[test]
    fn test_verify_malformed_hash_is_error() {
        let result = verify_password("pw", "not-a-phc-string");
        assert!(matches!(result, Err(StoreError::PasswordHash(_))));
    }

    #[tokio::test]
    async fn test_blocking_variants() {
        let hash = hash_password_blocking("pw1".to_string()).await.unwrap();
        assert!(verify_password_blocking("pw1".to_string(), hash.clone()).await.unwrap());
        assert!(!verify_password_blocking("pw2".to_string(), hash).await.unwrap());
    }
}
