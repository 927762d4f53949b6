//! Session tokens: signed, time-limited JWTs carrying the user's identity.
//!
//! Tokens are stateless. A token is accepted if its signature verifies
//! under the configured key and algorithm and its `exp` has not passed;
//! there is no revocation list.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use notes_core::UserId;
use serde::{Deserialize, Serialize};

use crate::config::ServerConfig;

/// Upper bound on the token lifetime (100 years), keeping `exp` in range.
const MAX_TTL_MINUTES: i64 = 100 * 366 * 24 * 60;

/// JWT claims.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// User ID. Tokens issued by this server always carry it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    /// Expiration time (unix timestamp).
    pub exp: i64,
    /// Issued at (unix timestamp).
    #[serde(default)]
    pub iat: i64,
}

/// Token errors.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// The token's `exp` has passed.
    #[error("token has expired")]
    Expired,

    /// Bad signature, wrong algorithm, or malformed token.
    #[error("invalid token: {0}")]
    Invalid(String),

    /// Signing failed.
    #[error("failed to sign token: {0}")]
    Signing(String),
}

/// Issues and validates session tokens.
///
/// Built once at startup from [`ServerConfig`] and shared by all handlers.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    header: Header,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    /// Create a token service for an HMAC `secret`.
    pub fn new(secret: &str, algorithm: Algorithm, ttl_minutes: u64) -> Self {
        let mut validation = Validation::new(algorithm);
        validation.leeway = 0;
        validation.validate_exp = true;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            header: Header::new(algorithm),
            validation,
            ttl: Duration::minutes(
                i64::try_from(ttl_minutes).map_or(MAX_TTL_MINUTES, |m| m.min(MAX_TTL_MINUTES)),
            ),
        }
    }

    /// Create a token service from server configuration.
    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(
            &config.jwt_secret,
            config.jwt_algorithm,
            config.token_ttl_minutes,
        )
    }

    /// Token lifetime in minutes.
    pub fn ttl_minutes(&self) -> i64 {
        self.ttl.num_minutes()
    }

    /// Issue a token for a user, valid from now for the configured TTL.
    pub fn issue(&self, user_id: UserId, email: &str, username: &str) -> Result<String, TokenError> {
        self.issue_at(user_id, email, username, Utc::now())
    }

    /// Issue a token as if it had been issued at `issued_at`.
    pub fn issue_at(
        &self,
        user_id: UserId,
        email: &str,
        username: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = Claims {
            id: Some(user_id),
            email: email.to_string(),
            username: username.to_string(),
            exp: (issued_at + self.ttl).timestamp(),
            iat: issued_at.timestamp(),
        };

        encode(&self.header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Validate a token and return its claims.
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            })
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("algorithm", &self.header.alg)
            .field("ttl_minutes", &self.ttl.num_minutes())
            .finish_non_exhaustive()
    }
}
