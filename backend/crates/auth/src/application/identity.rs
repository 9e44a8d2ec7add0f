//! Identity Resolution
//!
//! Turns the `Authorization` header of a request into an [`Identity`].
//! An absent header (or one without the bearer scheme) is anonymous; a
//! bearer token that fails verification is an error.

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::config::BEARER_PREFIX;
use crate::application::token::TokenCodec;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// The authenticated caller, as seen by downstream operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub user_name: String,
    pub name: String,
}

impl From<User> for CurrentUser {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            user_name: user.user_name.into_inner(),
            name: user.name,
        }
    }
}

/// Request-scoped caller identity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Identity {
    #[default]
    Anonymous,
    User(CurrentUser),
}

impl Identity {
    pub fn user(&self) -> Option<&CurrentUser> {
        match self {
            Identity::Anonymous => None,
            Identity::User(user) => Some(user),
        }
    }

    /// The caller, or `Unauthorized` when anonymous
    pub fn require(&self) -> AuthResult<&CurrentUser> {
        self.user().ok_or(AuthError::Unauthorized)
    }
}

/// Extract the token part of a bearer `Authorization` header value
pub fn bearer_token(authorization: Option<&str>) -> Option<&str> {
    authorization.and_then(|value| value.strip_prefix(BEARER_PREFIX))
}

/// Resolve identity use case
pub struct ResolveIdentityUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    codec: Arc<TokenCodec>,
}

impl<U> ResolveIdentityUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, codec: Arc<TokenCodec>) -> Self {
        Self { user_repo, codec }
    }

    /// Resolve the raw `Authorization` header value
    ///
    /// - no header / other scheme: `Anonymous`
    /// - bearer token failing verification: `Err(InvalidToken)`
    /// - valid token whose user no longer exists: `Anonymous`
    pub async fn execute(&self, authorization: Option<&str>) -> AuthResult<Identity> {
        let Some(token) = bearer_token(authorization) else {
            return Ok(Identity::Anonymous);
        };

        let user_id = self
            .codec
            .verify(token)
            .map_err(|_| AuthError::InvalidToken)?;

        match self.user_repo.find_by_id(&user_id).await? {
            Some(user) => Ok(Identity::User(user.into())),
            None => {
                tracing::debug!(user_id = %user_id, "Token subject no longer exists");
                Ok(Identity::Anonymous)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::AuthConfig;
    use crate::domain::value_object::user_name::UserName;
    use crate::infra::memory::InMemoryUserRepository;

    async fn setup() -> (ResolveIdentityUseCase<InMemoryUserRepository>, Arc<TokenCodec>, User) {
        let repo = InMemoryUserRepository::new();
        let user = User::new(UserName::new("mluukkai").unwrap(), "Matti", "hash".into());
        repo.create(&user).await.unwrap();

        let codec = Arc::new(TokenCodec::new(&AuthConfig::with_random_secret()));
        (
            ResolveIdentityUseCase::new(Arc::new(repo), codec.clone()),
            codec,
            user,
        )
    }

    #[test]
    fn test_bearer_token_extraction() {
        assert_eq!(bearer_token(Some("Bearer abc.def")), Some("abc.def"));
        assert_eq!(bearer_token(Some("Bearer ")), Some(""));
        assert_eq!(bearer_token(Some("bearer abc")), None);
        assert_eq!(bearer_token(Some("Basic dXNlcjpwYXNz")), None);
        assert_eq!(bearer_token(None), None);
    }

    #[test]
    fn test_require_anonymous_is_unauthorized() {
        assert!(matches!(
            Identity::Anonymous.require(),
            Err(AuthError::Unauthorized)
        ));
    }

    #[tokio::test]
    async fn test_no_header_is_anonymous() {
        let (use_case, _, _) = setup().await;
        assert_eq!(use_case.execute(None).await.unwrap(), Identity::Anonymous);
        assert_eq!(
            use_case.execute(Some("Token xyz")).await.unwrap(),
            Identity::Anonymous
        );
    }

    #[tokio::test]
    async fn test_valid_token_resolves_user() {
        let (use_case, codec, user) = setup().await;
        let header = format!("Bearer {}", codec.issue(&user.user_id).unwrap());

        let identity = use_case.execute(Some(&header)).await.unwrap();
        let current = identity.require().unwrap();
        assert_eq!(current.user_id, user.user_id);
        assert_eq!(current.user_name, "mluukkai");
        assert_eq!(current.name, "Matti");
    }

    #[tokio::test]
    async fn test_bad_token_is_hard_failure() {
        let (use_case, _, _) = setup().await;
        assert!(matches!(
            use_case.execute(Some("Bearer garbage")).await,
            Err(AuthError::InvalidToken)
        ));
        assert!(matches!(
            use_case.execute(Some("Bearer ")).await,
            Err(AuthError::InvalidToken)
        ));
    }

    #[tokio::test]
    async fn test_unknown_subject_is_anonymous() {
        let (use_case, codec, _) = setup().await;
        let header = format!("Bearer {}", codec.issue(&UserId::new()).unwrap());
        assert_eq!(
            use_case.execute(Some(&header)).await.unwrap(),
            Identity::Anonymous
        );
    }
}
