//! Server configuration from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

use jsonwebtoken::Algorithm;

/// Default token lifetime: 24 hours.
pub const DEFAULT_TOKEN_TTL_MINUTES: u64 = 1440;

/// Server configuration.
#[derive(Clone)]
pub struct ServerConfig {
    /// Server port to listen on.
    pub port: u16,
    /// Log level (trace, debug, info, warn, error) or an `EnvFilter` directive.
    pub log_level: String,
    /// Log output format.
    pub log_format: LogFormat,
    /// CORS allowed origins (comma-separated or "*" for all).
    pub cors_allowed_origins: String,
    /// HMAC secret used to sign session tokens.
    pub jwt_secret: String,
    /// HMAC algorithm used to sign session tokens.
    pub jwt_algorithm: Algorithm,
    /// Session token lifetime in minutes.
    pub token_ttl_minutes: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `JWT_SECRET`: Token signing secret (must be non-empty)
    ///
    /// Optional:
    /// - `JWT_ALGORITHM`: HS256, HS384 or HS512 (default: HS256)
    /// - `ACCESS_TOKEN_EXPIRE_MINUTES`: Token lifetime (default: 1440)
    /// - `PORT`: Server port (default: 3000)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    /// - `LOG_FORMAT`: "pretty" or "json" (default: "pretty")
    /// - `CORS_ALLOWED_ORIGINS`: Allowed CORS origins (default: "*")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?;

        let jwt_algorithm = match lookup("JWT_ALGORITHM") {
            Some(value) => parse_hmac_algorithm(&value)?,
            None => Algorithm::HS256,
        };

        let token_ttl_minutes = match lookup("ACCESS_TOKEN_EXPIRE_MINUTES") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(minutes) if minutes > 0 => minutes,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: "ACCESS_TOKEN_EXPIRE_MINUTES".to_string(),
                        reason: format!("expected a positive integer, got {:?}", value),
                    });
                }
            },
            None => DEFAULT_TOKEN_TTL_MINUTES,
        };

        let port = match lookup("PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT".to_string(),
                reason: format!("expected a port number, got {:?}", value),
            })?,
            None => 3000,
        };

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let log_format = match lookup("LOG_FORMAT") {
            Some(value) => value.parse()?,
            None => LogFormat::Pretty,
        };

        let cors_allowed_origins =
            lookup("CORS_ALLOWED_ORIGINS").unwrap_or_else(|| "*".to_string());

        Ok(Self {
            port,
            log_level,
            log_format,
            cors_allowed_origins,
            jwt_secret,
            jwt_algorithm,
            token_ttl_minutes,
        })
    }

    /// Get the socket address for the server.
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("jwt_secret", &"<redacted>")
            .field("jwt_algorithm", &self.jwt_algorithm)
            .field("token_ttl_minutes", &self.token_ttl_minutes)
            .finish()
    }
}

/// Only the HMAC family is accepted: the key is a shared secret.
fn parse_hmac_algorithm(value: &str) -> Result<Algorithm, ConfigError> {
    let invalid = || ConfigError::InvalidValue {
        name: "JWT_ALGORITHM".to_string(),
        reason: format!("expected HS256, HS384 or HS512, got {:?}", value),
    };

    match Algorithm::from_str(value.trim()).map_err(|_| invalid())? {
        alg @ (Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512) => Ok(alg),
        _ => Err(invalid()),
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-field lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::InvalidValue {
                name: "LOG_FORMAT".to_string(),
                reason: format!("expected \"pretty\" or \"json\", got {:?}", other),
            }),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Invalid environment variable value.
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = load(&[("JWT_SECRET", "s3cret")]).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.cors_allowed_origins, "*");
        assert_eq!(config.jwt_algorithm, Algorithm::HS256);
        assert_eq!(config.token_ttl_minutes, 1440);
    }

    #[test]
    fn test_missing_secret_fails() {
        let result = load(&[]);
        assert!(matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "JWT_SECRET"));
    }

    #[test]
    fn test_empty_secret_fails() {
        assert!(matches!(
            load(&[("JWT_SECRET", "")]),
            Err(ConfigError::MissingEnvVar(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("JWT_SECRET", "s3cret"),
            ("JWT_ALGORITHM", "HS512"),
            ("ACCESS_TOKEN_EXPIRE_MINUTES", "30"),
            ("PORT", "8000"),
            ("LOG_FORMAT", "json"),
        ])
        .unwrap();

        assert_eq!(config.jwt_algorithm, Algorithm::HS512);
        assert_eq!(config.token_ttl_minutes, 30);
        assert_eq!(config.port, 8000);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_rejects_asymmetric_algorithm() {
        let result = load(&[("JWT_SECRET", "s"), ("JWT_ALGORITHM", "RS256")]);
        assert!(matches!(result, Err(ConfigError::InvalidValue { ref name, .. }) if name == "JWT_ALGORITHM"));

        let result = load(&[("JWT_SECRET", "s"), ("JWT_ALGORITHM", "none")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_bad_numbers() {
        assert!(load(&[("JWT_SECRET", "s"), ("ACCESS_TOKEN_EXPIRE_MINUTES", "0")]).is_err());
        assert!(load(&[("JWT_SECRET", "s"), ("ACCESS_TOKEN_EXPIRE_MINUTES", "soon")]).is_err());
        assert!(load(&[("JWT_SECRET", "s"), ("PORT", "70000")]).is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = load(&[("JWT_SECRET", "do-not-print-me")]).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("do-not-print-me"));
        assert!(debug.contains("<redacted>"));
    }
}
