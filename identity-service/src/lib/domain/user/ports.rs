use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Port for user directory service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user with validated credentials.
    ///
    /// Pre-checks name and email uniqueness, hashes the password, and
    /// persists the user. The storage layer's unique constraints remain the
    /// source of truth: a concurrent registration racing past the pre-check
    /// still resolves to a conflict, not a double insert.
    ///
    /// # Arguments
    /// * `command` - Validated command containing name, email, and password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `NameAlreadyExists` - Name is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `PasswordHashing` - Credential hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Retrieve user by unique identifier.
    ///
    /// # Arguments
    /// * `id` - User ID
    ///
    /// # Returns
    /// User entity
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;

    /// Retrieve user by unique email address.
    ///
    /// # Arguments
    /// * `email` - Email address to search for
    ///
    /// # Returns
    /// User entity
    ///
    /// # Errors
    /// * `NotFoundByEmail` - No user with this email
    /// * `DatabaseError` - Database operation failed
    async fn get_user_by_email(&self, email: &str) -> Result<User, UserError>;

    /// Check whether any user is registered at all.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn any_user_exists(&self) -> Result<bool, UserError>;
}

/// Persistence operations for the user directory.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// The unique indexes on name and email are authoritative: under
    /// concurrent registration exactly one insert succeeds and the loser
    /// observes a conflict error, never a partial insert.
    ///
    /// # Arguments
    /// * `user` - User entity to create
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `NameAlreadyExists` - Name is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Arguments
    /// * `id` - User ID
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by email address.
    ///
    /// # Arguments
    /// * `email` - Email address string
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Check whether a user with this name exists (uniqueness pre-check).
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn name_exists(&self, name: &str) -> Result<bool, UserError>;

    /// Check whether a user with this email exists (uniqueness pre-check).
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn email_exists(&self, email: &str) -> Result<bool, UserError>;

    /// Check whether the directory contains any user at all.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn any_exists(&self) -> Result<bool, UserError>;
}
