//! Sign Up Use Case
//!
//! Registers a new user with a hashed credential.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::domain::credential::CredentialHasher;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub user_name: String,
    pub name: String,
    pub password: String,
}

/// Sign up use case
pub struct SignUpUseCase<U, H>
where
    U: UserRepository,
    H: CredentialHasher,
{
    user_repo: Arc<U>,
    hasher: Arc<H>,
}

impl<U, H> SignUpUseCase<U, H>
where
    U: UserRepository,
    H: CredentialHasher,
{
    pub fn new(user_repo: Arc<U>, hasher: Arc<H>) -> Self {
        Self { user_repo, hasher }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<User> {
        let user_name = UserName::new(&input.user_name)
            .map_err(|e| AuthError::InvalidUserName(e.to_string()))?;

        let password = ClearTextPassword::new(input.password)
            .map_err(|e| AuthError::PasswordValidation(e.to_string()))?;

        // Cheap pre-check; the repository still enforces uniqueness on insert
        if self.user_repo.exists_by_user_name(&user_name).await? {
            return Err(AuthError::UserNameTaken);
        }

        let password_hash = self.hasher.hash(&password)?;
        let user = User::new(user_name, input.name, password_hash);

        self.user_repo.create(&user).await?;

        tracing::info!(user_id = %user.user_id, user_name = %user.user_name, "User registered");

        Ok(user)
    }
}
