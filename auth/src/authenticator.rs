use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::Claims;
use crate::token::TokenError;
use crate::token::TokenService;

/// Authentication coordinator combining password verification and token issuance.
///
/// Provides high-level authentication operations by coordinating
/// password hashing and identity token handling.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_service: TokenService,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed identity token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `token_service` - Configured token service (secret, issuer, audience, TTL)
    ///
    /// # Returns
    /// Configured Authenticator instance
    pub fn new(token_service: TokenService) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_service,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Arguments
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Hashed password string
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue an identity token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `user_id` - Subject identifier bound into the token
    /// * `email` - Email address bound into the token
    /// * `name` - Display name bound into the token
    ///
    /// # Returns
    /// AuthenticationResult with access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match the stored hash
    /// * `TokenError` - Token issuance failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        user_id: &str,
        email: &str,
        name: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.token_service.issue(user_id, email, name)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Validate and decode an identity token.
    ///
    /// # Arguments
    /// * `token` - Token string
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `TokenError` - Token is expired, mis-signed, or mis-addressed
    pub fn validate_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.token_service.verify(token)
    }
}
