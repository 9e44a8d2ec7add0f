//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::TokenCodec;
use crate::domain::credential::{CredentialHasher, CredentialVerifier};
use crate::domain::repository::UserRepository;
use crate::infra::{Argon2Credentials, PgUserRepository};
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL repository and Argon2 credentials
pub fn auth_router(
    repo: PgUserRepository,
    credentials: Argon2Credentials,
    codec: Arc<TokenCodec>,
) -> Router {
    auth_router_generic(repo, credentials, codec)
}

/// Create a generic Auth router for any repository / credential scheme
pub fn auth_router_generic<U, C>(users: U, credentials: C, codec: Arc<TokenCodec>) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
    C: CredentialVerifier + CredentialHasher + Clone,
{
    let state = AuthAppState {
        users: Arc::new(users),
        credentials: Arc::new(credentials),
        codec,
    };

    Router::new()
        .route(
            "/users",
            get(handlers::list_users::<U, C>).post(handlers::register::<U, C>),
        )
        .route("/login", post(handlers::login::<U, C>))
        .with_state(state)
}
