use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use uuid::Uuid;

use super::claims::Claims;
use super::errors::TokenError;

/// Issues and verifies signed identity tokens.
///
/// Uses HS256 (HMAC with SHA-256). Issuer, audience, and time-to-live are
/// fixed at construction from configuration; verification enforces signature,
/// expiry, issuer, and audience together, so a token is never partially
/// trusted.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    issuer: String,
    audience: String,
    ttl_hours: i64,
}

impl TokenService {
    /// Create a new token service.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    /// * `issuer` - Value for the `iss` claim, enforced on verification
    /// * `audience` - Value for the `aud` claim, enforced on verification
    /// * `ttl_hours` - Hours until an issued token expires
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8], issuer: &str, audience: &str, ttl_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            issuer: issuer.to_string(),
            audience: audience.to_string(),
            ttl_hours,
        }
    }

    /// Issue a signed, time-bounded token for a user.
    ///
    /// # Arguments
    /// * `user_id` - Subject identifier (goes into `sub`)
    /// * `email` - Email address of the user
    /// * `name` - Display name of the user
    ///
    /// # Returns
    /// JWT token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, user_id: &str, email: &str, name: &str) -> Result<String, TokenError> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.ttl_hours);

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            jti: Uuid::new_v4().to_string(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let header = Header::new(self.algorithm);
        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify and decode a token.
    ///
    /// Checks signature integrity, expiry, issuer, and audience.
    ///
    /// # Arguments
    /// * `token` - JWT token string
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `TokenExpired` - Token has expired
    /// * `InvalidToken` - Signature, issuer, or audience check failed, or the
    ///   token is malformed
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                    _ => TokenError::InvalidToken(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(secret: &[u8], ttl_hours: i64) -> TokenService {
        TokenService::new(secret, "blog-backend", "blog-frontend", ttl_hours)
    }

    #[test]
    fn test_issue_and_verify() {
        let tokens = service(b"my_secret_key_at_least_32_bytes_long!", 24);

        let token = tokens
            .issue("user123", "alice@example.com", "alice")
            .expect("Failed to issue token");
        assert!(!token.is_empty());

        let claims = tokens.verify(&token).expect("Failed to verify token");
        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.name, "alice");
        assert_eq!(claims.iss, "blog-backend");
        assert_eq!(claims.aud, "blog-frontend");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn test_jti_is_unique_per_token() {
        let tokens = service(b"my_secret_key_at_least_32_bytes_long!", 24);

        let first = tokens.issue("user123", "a@example.com", "a").unwrap();
        let second = tokens.issue("user123", "a@example.com", "a").unwrap();

        let first_claims = tokens.verify(&first).unwrap();
        let second_claims = tokens.verify(&second).unwrap();
        assert_ne!(first_claims.jti, second_claims.jti);
    }

    #[test]
    fn test_verify_invalid_token() {
        let tokens = service(b"my_secret_key_at_least_32_bytes_long!", 24);

        let result = tokens.verify("invalid.token.here");
        assert!(matches!(result, Err(TokenError::InvalidToken(_))));
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let issuing = service(b"secret1_at_least_32_bytes_long_key!", 24);
        let verifying = service(b"secret2_at_least_32_bytes_long_key!", 24);

        let token = issuing.issue("user123", "a@example.com", "a").unwrap();

        let result = verifying.verify(&token);
        assert!(matches!(result, Err(TokenError::InvalidToken(_))));
    }

    #[test]
    fn test_verify_with_wrong_audience() {
        let issuing = TokenService::new(
            b"my_secret_key_at_least_32_bytes_long!",
            "blog-backend",
            "other-frontend",
            24,
        );
        let verifying = service(b"my_secret_key_at_least_32_bytes_long!", 24);

        let token = issuing.issue("user123", "a@example.com", "a").unwrap();

        let result = verifying.verify(&token);
        assert!(matches!(result, Err(TokenError::InvalidToken(_))));
    }

    #[test]
    fn test_verify_with_wrong_issuer() {
        let issuing = TokenService::new(
            b"my_secret_key_at_least_32_bytes_long!",
            "other-backend",
            "blog-frontend",
            24,
        );
        let verifying = service(b"my_secret_key_at_least_32_bytes_long!", 24);

        let token = issuing.issue("user123", "a@example.com", "a").unwrap();

        let result = verifying.verify(&token);
        assert!(matches!(result, Err(TokenError::InvalidToken(_))));
    }

    #[test]
    fn test_verify_expired_token() {
        // Expiry two hours in the past, beyond the default validation leeway
        let tokens = service(b"my_secret_key_at_least_32_bytes_long!", -2);

        let token = tokens.issue("user123", "a@example.com", "a").unwrap();

        let result = tokens.verify(&token);
        assert!(matches!(result, Err(TokenError::TokenExpired)));
    }
}
