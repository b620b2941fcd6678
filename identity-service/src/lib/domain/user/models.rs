use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::user::errors::EmailError;
use crate::domain::user::errors::UserIdError;
use crate::domain::user::errors::UsernameError;

/// User aggregate entity.
///
/// Created only through registration; `id` never changes afterwards.
/// `password_hash` is the one-way Argon2id form of the credential and is
/// never serialized outward.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: Username,
    pub email: EmailAddress,
    pub password_hash: String,
    pub avatar: String,
    pub signature: String,
    pub background: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    ///
    /// # Returns
    /// UserId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Arguments
    /// * `s` - UUID string to parse
    ///
    /// # Returns
    /// Parsed UserId
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Ensures the display/login name is 3-32 characters and contains only
/// alphanumeric, underscore, and hyphen. Uniqueness is exact-match,
/// case-sensitive, enforced by the directory's storage layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    const MIN_LENGTH: usize = 3;
    const MAX_LENGTH: usize = 32;

    /// Create a new valid username.
    ///
    /// Validates length and character constraints.
    ///
    /// # Arguments
    /// * `name` - Raw username string
    ///
    /// # Returns
    /// Validated Username value object
    ///
    /// # Errors
    /// * `TooShort` - Name shorter than 3 characters
    /// * `TooLong` - Name longer than 32 characters
    /// * `InvalidCharacters` - Contains non-alphanumeric characters (except _ and -)
    pub fn new(name: String) -> Result<Self, UsernameError> {
        let name = Self::with_valid_length(name)?;
        let name = Self::with_valid_chars(name)?;
        Ok(Self(name))
    }

    fn with_valid_length(name: String) -> Result<String, UsernameError> {
        let length = name.len();
        if length < Self::MIN_LENGTH {
            Err(UsernameError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(name)
        }
    }

    fn with_valid_chars(name: String) -> Result<String, UsernameError> {
        if name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
        {
            Ok(name)
        } else {
            Err(UsernameError::InvalidCharacters)
        }
    }

    /// Get username as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Arguments
    /// * `email` - Raw email string
    ///
    /// # Returns
    /// Validated EmailAddress value object
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new user with domain types
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub name: Username,
    pub email: EmailAddress,
    pub password: String,
}

impl RegisterUserCommand {
    /// Construct a new register user command.
    ///
    /// # Arguments
    /// * `name` - Validated username
    /// * `email` - Validated email address
    /// * `password` - Plain text password (will be hashed by service)
    ///
    /// # Returns
    /// RegisterUserCommand with validated fields
    pub fn new(name: Username, email: EmailAddress, password: String) -> Self {
        Self {
            name,
            email,
            password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_valid() {
        let name = Username::new("alice_01".to_string()).unwrap();
        assert_eq!(name.as_str(), "alice_01");
    }

    #[test]
    fn test_username_too_short() {
        let result = Username::new("al".to_string());
        assert!(matches!(result, Err(UsernameError::TooShort { .. })));
    }

    #[test]
    fn test_username_invalid_chars() {
        let result = Username::new("alice !".to_string());
        assert!(matches!(result, Err(UsernameError::InvalidCharacters)));
    }

    #[test]
    fn test_email_valid() {
        let email = EmailAddress::new("alice@x.com".to_string()).unwrap();
        assert_eq!(email.as_str(), "alice@x.com");
    }

    #[test]
    fn test_email_invalid() {
        let result = EmailAddress::new("not-an-email".to_string());
        assert!(matches!(result, Err(EmailError::InvalidFormat(_))));
    }

    #[test]
    fn test_user_id_round_trip() {
        let id = UserId::new();
        let parsed = UserId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_user_id_invalid() {
        let result = UserId::from_string("not-a-uuid");
        assert!(matches!(result, Err(UserIdError::InvalidFormat(_))));
    }
}
