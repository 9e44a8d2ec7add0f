//! In-memory repository
//!
//! Keeps users in registration order behind a `tokio` lock. Used by tests
//! and by the API binary when no database is configured.

use std::sync::Arc;

use kernel::id::UserId;
use tokio::sync::RwLock;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.write().await;
        // Checked under the write lock so concurrent sign-ups cannot race
        if users.iter().any(|u| u.user_name == user.user_name) {
            return Err(AuthError::UserNameTaken);
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_all(&self) -> AuthResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| &u.user_id == user_id).cloned())
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| &u.user_name == user_name).cloned())
    }

    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool> {
        let users = self.users.read().await;
        Ok(users.iter().any(|u| &u.user_name == user_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> User {
        User::new(UserName::new(name).unwrap(), name, "hash".into())
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryUserRepository::new();
        let alice = user("alice");
        repo.create(&alice).await.unwrap();

        let found = repo.find_by_id(&alice.user_id).await.unwrap().unwrap();
        assert_eq!(found.user_name, alice.user_name);
        assert!(repo.exists_by_user_name(&alice.user_name).await.unwrap());
        assert!(repo.find_by_id(&UserId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_user_name_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.create(&user("alice")).await.unwrap();

        let result = repo.create(&user("alice")).await;
        assert!(matches!(result, Err(AuthError::UserNameTaken)));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_all_keeps_registration_order() {
        let repo = InMemoryUserRepository::new();
        for name in ["carol", "alice", "bob"] {
            repo.create(&user(name)).await.unwrap();
        }
        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.user_name.into_inner())
            .collect();
        assert_eq!(names, ["carol", "alice", "bob"]);
    }
}
