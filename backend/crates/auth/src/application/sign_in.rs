//! Sign In Use Case
//!
//! Verifies a user name / password pair and issues a bearer token.

use std::sync::Arc;

use crate::application::token::TokenCodec;
use crate::domain::credential::CredentialVerifier;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub user_name: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    pub token: String,
    pub user_name: String,
    pub name: String,
}

/// Sign in use case
pub struct SignInUseCase<U, C>
where
    U: UserRepository,
    C: CredentialVerifier,
{
    user_repo: Arc<U>,
    verifier: Arc<C>,
    codec: Arc<TokenCodec>,
}

impl<U, C> SignInUseCase<U, C>
where
    U: UserRepository,
    C: CredentialVerifier,
{
    pub fn new(user_repo: Arc<U>, verifier: Arc<C>, codec: Arc<TokenCodec>) -> Self {
        Self {
            user_repo,
            verifier,
            codec,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        // A user name that cannot exist is the same failure as a wrong password
        let user_name =
            UserName::new(&input.user_name).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_user_name(&user_name)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.verifier.verify(&input.password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.codec.issue(&user.user_id)?;

        tracing::info!(user_id = %user.user_id, "User signed in");

        Ok(SignInOutput {
            token,
            user_name: user.user_name.into_inner(),
            name: user.name,
        })
    }
}
