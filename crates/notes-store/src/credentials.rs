//! Credential store: registered users and their password hashes.

use std::collections::HashMap;

use chrono::Utc;
use notes_core::{User, UserId, UserProfile};
use tokio::sync::{OnceCell, RwLock};

use crate::error::{StoreError, StoreResult};
use crate::password;

/// Password checked against [`CredentialStore`]'s placeholder hash when a
/// login names an unknown email.
const PLACEHOLDER_PASSWORD: &str = "placeholder-password";

/// In-memory table of registered users.
///
/// Emails are unique and compared exactly as stored. Ids are handed out from
/// a counter advanced under the write lock, so concurrent registrations never
/// share an id.
#[derive(Debug, Default)]
pub struct CredentialStore {
    inner: RwLock<UserTable>,
    /// Hash verified for unknown emails so both login failures cost one Argon2 run.
    placeholder_hash: OnceCell<String>,
}

#[derive(Debug)]
struct UserTable {
    users: HashMap<UserId, User>,
    by_email: HashMap<String, UserId>,
    next_id: UserId,
}

impl Default for UserTable {
    fn default() -> Self {
        Self {
            users: HashMap::new(),
            by_email: HashMap::new(),
            next_id: UserId::FIRST,
        }
    }
}

impl UserTable {
    fn contains_email(&self, email: &str) -> bool {
        self.by_email.contains_key(email)
    }

    fn find_by_email(&self, email: &str) -> Option<&User> {
        self.by_email.get(email).and_then(|id| self.users.get(id))
    }
}

impl CredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new user.
    ///
    /// Fails with [`StoreError::DuplicateUser`] if `email` is taken. The
    /// password is hashed before the write lock is taken, and the duplicate
    /// check is repeated under the lock.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> StoreResult<UserProfile> {
        if self.inner.read().await.contains_email(email) {
            return Err(StoreError::DuplicateUser(email.to_string()));
        }

        let password_hash = password::hash_password_blocking(password.to_string()).await?;

        let mut table = self.inner.write().await;
        if table.contains_email(email) {
            return Err(StoreError::DuplicateUser(email.to_string()));
        }

        let id = table.next_id;
        table.next_id = id.next();

        let user = User {
            id,
            username: username.to_string(),
            email: email.to_string(),
            password_hash,
            created_at: Utc::now(),
        };
        let profile = user.profile();

        table.by_email.insert(user.email.clone(), id);
        table.users.insert(id, user);

        tracing::debug!(user_id = %id, "User record stored");
        Ok(profile)
    }

    /// Look up a user by exact email, including the password hash.
    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        self.inner.read().await.find_by_email(email).cloned()
    }

    /// Check `password` against a stored hash using Argon2's verify step.
    pub async fn verify_password(&self, password: &str, password_hash: &str) -> StoreResult<bool> {
        password::verify_password_blocking(password.to_string(), password_hash.to_string()).await
    }

    /// Resolve an email/password pair to a user.
    ///
    /// Unknown email and wrong password both yield
    /// [`StoreError::InvalidCredentials`].
    pub async fn authenticate(&self, email: &str, password: &str) -> StoreResult<User> {
        let Some(user) = self.find_by_email(email).await else {
            let placeholder = self.placeholder_hash().await?;
            self.verify_password(password, placeholder).await?;
            return Err(StoreError::InvalidCredentials);
        };

        if self.verify_password(password, &user.password_hash).await? {
            Ok(user)
        } else {
            Err(StoreError::InvalidCredentials)
        }
    }

    async fn placeholder_hash(&self) -> StoreResult<&str> {
        self.placeholder_hash
            .get_or_try_init(|| password::hash_password_blocking(PLACEHOLDER_PASSWORD.to_string()))
            .await
            .map(String::as_str)
    }

    /// Number of registered users.
    pub async fn count(&self) -> usize {
        self.inner.read().await.users.len()
    }
}
