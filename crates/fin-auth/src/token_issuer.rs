use crate::{AuthError, Claims, Result as AuthErrorResult};

use fin_core::ErrorLocation;

use std::panic::Location;

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// Issues and verifies HS256 access tokens.
///
/// The secret, algorithm, and default lifetime are fixed at construction,
/// once per process. Issued tokens stay valid until their expiration
/// elapses; there is no revocation list.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    default_ttl: Duration,
}

impl TokenIssuer {
    /// Create an issuer with an HS256 shared secret and a default token lifetime.
    pub fn with_hs256(secret: &[u8], default_ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0; // expiry is exact, no clock-skew allowance

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            default_ttl,
        }
    }

    /// Issue a signed token for a subject.
    ///
    /// `ttl` overrides the configured default lifetime when given.
    #[track_caller]
    pub fn issue(&self, subject: &str, ttl: Option<Duration>) -> AuthErrorResult<String> {
        let now = Utc::now();
        let expires_at = now + ttl.unwrap_or(self.default_ttl);

        let claims = Claims {
            sub: subject.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::InvalidToken {
                message: format!("Failed to sign token: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Validate a token's signature and expiration and return its claims.
    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        // Additional claim validation
        token_data.claims.validate()?;

        Ok(token_data.claims)
    }

    /// Default lifetime applied when `issue` is called without a ttl.
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }
}
