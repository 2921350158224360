use crate::{ConfigError, ConfigErrorResult, DEFAULT_TOKEN_TTL_MINUTES, MIN_JWT_SECRET_BYTES};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. Required; the server refuses to start without it.
    pub jwt_secret: Option<String>,
    /// Default access token lifetime in minutes.
    pub token_ttl_minutes: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_minutes: DEFAULT_TOKEN_TTL_MINUTES,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.jwt_secret {
            None => {
                return Err(ConfigError::auth(
                    "auth.jwt_secret is required (set it in config.toml or FIN_AUTH_JWT_SECRET)",
                ));
            }
            Some(ref secret) if secret.len() < MIN_JWT_SECRET_BYTES => {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} bytes, got {}",
                    MIN_JWT_SECRET_BYTES,
                    secret.len()
                )));
            }
            Some(_) => {}
        }

        if self.token_ttl_minutes <= 0 {
            return Err(ConfigError::auth(format!(
                "auth.token_ttl_minutes must be positive, got {}",
                self.token_ttl_minutes
            )));
        }

        Ok(())
    }
}
