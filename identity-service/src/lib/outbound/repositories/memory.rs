use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// In-memory user directory.
///
/// Implements the same contract as the Postgres adapter, with the uniqueness
/// check and the insert performed under a single lock acquisition so that two
/// racing registrations resolve the same way the database unique index does:
/// exactly one wins, the other observes a conflict.
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<Uuid, User>>, UserError> {
        self.users
            .lock()
            .map_err(|e| UserError::DatabaseError(format!("Lock poisoned: {}", e)))
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.lock()?;

        if users.values().any(|u| u.name == user.name) {
            return Err(UserError::NameAlreadyExists(user.name.as_str().to_string()));
        }
        if users.values().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }

        users.insert(user.id.0, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.lock()?.get(&id.0).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        Ok(self
            .lock()?
            .values()
            .find(|u| u.email.as_str() == email)
            .cloned())
    }

    async fn name_exists(&self, name: &str) -> Result<bool, UserError> {
        Ok(self.lock()?.values().any(|u| u.name.as_str() == name))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, UserError> {
        Ok(self.lock()?.values().any(|u| u.email.as_str() == email))
    }

    async fn any_exists(&self) -> Result<bool, UserError> {
        Ok(!self.lock()?.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::Username;

    fn user(name: &str, email: &str) -> User {
        let now = Utc::now();
        User {
            id: UserId::new(),
            name: Username::new(name.to_string()).unwrap(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            avatar: String::new(),
            signature: String::new(),
            background: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryUserRepository::new();

        let created = repo.create(user("alice", "alice@x.com")).await.unwrap();

        let by_id = repo.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(by_id.name.as_str(), "alice");

        let by_email = repo.find_by_email("alice@x.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, created.id);

        assert!(repo.name_exists("alice").await.unwrap());
        assert!(repo.email_exists("alice@x.com").await.unwrap());
        assert!(repo.any_exists().await.unwrap());
    }

    #[tokio::test]
    async fn test_empty_directory() {
        let repo = InMemoryUserRepository::new();

        assert!(!repo.any_exists().await.unwrap());
        assert!(!repo.name_exists("alice").await.unwrap());
        assert!(repo.find_by_email("alice@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = InMemoryUserRepository::new();

        repo.create(user("alice", "alice@x.com")).await.unwrap();
        let result = repo.create(user("bob", "alice@x.com")).await;

        assert!(matches!(
            result.unwrap_err(),
            UserError::EmailAlreadyExists(_)
        ));

        // Idempotent failure: the directory grew by exactly one
        assert!(repo.find_by_email("alice@x.com").await.unwrap().is_some());
        assert!(!repo.name_exists("bob").await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_name_rejected() {
        let repo = InMemoryUserRepository::new();

        repo.create(user("alice", "alice@x.com")).await.unwrap();
        let result = repo.create(user("alice", "alice2@x.com")).await;

        assert!(matches!(
            result.unwrap_err(),
            UserError::NameAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_concurrent_registration_single_winner() {
        use std::sync::Arc;

        let repo = Arc::new(InMemoryUserRepository::new());

        let tasks: Vec<_> = (0..8)
            .map(|i| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move {
                    repo.create(user(&format!("racer{}", i), "shared@x.com")).await
                })
            })
            .collect();

        let mut winners = 0;
        let mut conflicts = 0;
        for task in tasks {
            match task.await.unwrap() {
                Ok(_) => winners += 1,
                Err(UserError::EmailAlreadyExists(_)) => conflicts += 1,
                Err(e) => panic!("unexpected error: {}", e),
            }
        }

        assert_eq!(winners, 1);
        assert_eq!(conflicts, 7);
    }
}
