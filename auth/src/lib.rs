//! Authentication utilities library
//!
//! Provides the credential and token primitives for the identity service:
//! - Password hashing (Argon2id)
//! - Signed, time-limited identity tokens (HS256 JWT with issuer/audience)
//! - Authentication coordination
//!
//! The service defines its own domain traits and adapts these implementations,
//! so this crate stays free of I/O and framework types.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("wrong_password", &hash));
//! ```
//!
//! ## Identity Tokens
//! ```
//! use auth::TokenService;
//!
//! let tokens = TokenService::new(
//!     b"secret_key_at_least_32_bytes_long!",
//!     "blog-backend",
//!     "blog-frontend",
//!     24,
//! );
//! let token = tokens.issue("user123", "alice@example.com", "alice").unwrap();
//! let claims = tokens.verify(&token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, TokenService};
//!
//! let tokens = TokenService::new(
//!     b"secret_key_at_least_32_bytes_long!",
//!     "blog-backend",
//!     "blog-frontend",
//!     24,
//! );
//! let auth = Authenticator::new(tokens);
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let result = auth
//!     .authenticate("password123", &hash, "user123", "alice@example.com", "alice")
//!     .unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.email, "alice@example.com");
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenService;
