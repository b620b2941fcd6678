use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Domain service implementation for the user directory.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    ///
    /// # Returns
    /// Configured user service instance
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        // Uniqueness pre-checks. These give a clean error early, but the
        // repository's unique constraints remain the source of truth under
        // concurrent registration.
        if self.repository.email_exists(command.email.as_str()).await? {
            return Err(UserError::EmailAlreadyExists(
                command.email.as_str().to_string(),
            ));
        }
        if self.repository.name_exists(command.name.as_str()).await? {
            return Err(UserError::NameAlreadyExists(
                command.name.as_str().to_string(),
            ));
        }

        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| UserError::PasswordHashing(e.to_string()))?;

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            name: command.name,
            email: command.email,
            password_hash,
            avatar: String::new(),
            signature: String::new(),
            background: String::new(),
            created_at: now,
            updated_at: now,
        };

        self.repository.create(user).await
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn get_user_by_email(&self, email: &str) -> Result<User, UserError> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or(UserError::NotFoundByEmail(email.to_string()))
    }

    async fn any_user_exists(&self) -> Result<bool, UserError> {
        self.repository.any_exists().await
    }
}
