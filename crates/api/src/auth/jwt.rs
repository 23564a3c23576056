//! JWT access-token generation and validation.
//!
//! Tokens are HS256-signed JWTs containing a [`Claims`] payload and are
//! verified without a store round-trip.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use taskdeck_core::types::DbId;

/// JWT claims embedded in every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's id.
    pub sub: DbId,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

/// Configuration for JWT token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Token lifetime in hours (default: 24).
    pub expiry_hours: i64,
}

/// Default token lifetime in hours.
pub const DEFAULT_EXPIRY_HOURS: i64 = 24;

impl JwtConfig {
    /// Build a config with the default 24-hour expiry.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expiry_hours: DEFAULT_EXPIRY_HOURS,
        }
    }

    pub fn with_expiry_hours(mut self, hours: i64) -> Self {
        self.expiry_hours = hours;
        self
    }

    /// Token lifetime in seconds, as reported to clients.
    pub fn expires_in_secs(&self) -> i64 {
        self.expiry_hours * 3600
    }

    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var                | Required | Default |
    /// |------------------------|----------|---------|
    /// | `JWT_SECRET`           | **yes**  | --      |
    /// | `JWT_EXPIRATION_HOURS` | no       | `24`    |
    ///
    /// An unparsable `JWT_EXPIRATION_HOURS` falls back to the default.
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.trim().is_empty(), "JWT_SECRET must not be empty");

        let expiry_hours = std::env::var("JWT_EXPIRATION_HOURS")
            .ok()
            .and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|h| *h > 0)
            .unwrap_or(DEFAULT_EXPIRY_HOURS);

        Self::new(secret).with_expiry_hours(expiry_hours)
    }
}

/// Generate an HS256 access token for the given user.
pub fn generate_access_token(
    user_id: DbId,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        exp: now + config.expires_in_secs(),
        iat: now,
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode an access token, returning the embedded [`Claims`].
///
/// Validates the signature and expiration.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig::new("test-secret-that-is-long-enough-for-hmac")
    }

    #[test]
    fn test_generate_and_validate_access_token() {
        let config = test_config();
        let user_id = DbId::new_v4();
        let token =
            generate_access_token(user_id, &config).expect("token generation should succeed");

        let claims = validate_token(&token, &config).expect("token validation should succeed");
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn test_expiry_is_overridable() {
        let config = test_config().with_expiry_hours(2);
        let token = generate_access_token(DbId::new_v4(), &config).unwrap();
        let claims = validate_token(&token, &config).unwrap();
        assert_eq!(claims.exp - claims.iat, 2 * 3600);
        assert_eq!(config.expires_in_secs(), 7200);
    }

    #[test]
    fn test_expired_token_fails() {
        let config = test_config();

        // Use a margin well beyond the default 60-second leeway.
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: DbId::new_v4(),
            exp: now - 300,
            iat: now - 600,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .expect("encoding should succeed");

        assert!(
            validate_token(&token, &config).is_err(),
            "expired token must fail validation"
        );
    }

    #[test]
    fn test_different_secrets_fail() {
        let token = generate_access_token(DbId::new_v4(), &JwtConfig::new("secret-alpha"))
            .expect("token generation should succeed");

        let result = validate_token(&token, &JwtConfig::new("secret-bravo"));
        assert!(result.is_err(), "token signed with a different secret must fail");
    }
}
