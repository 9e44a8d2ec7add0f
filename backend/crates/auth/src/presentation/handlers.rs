//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::{
    ListUsersUseCase, SignInInput, SignInUseCase, SignUpInput, SignUpUseCase, TokenCodec,
};
use crate::domain::credential::{CredentialHasher, CredentialVerifier};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<U, C>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    C: CredentialVerifier + CredentialHasher + Clone,
{
    pub users: Arc<U>,
    pub credentials: Arc<C>,
    pub codec: Arc<TokenCodec>,
}

// ============================================================================
// Users
// ============================================================================

/// POST /api/users
pub async fn register<U, C>(
    State(state): State<AuthAppState<U, C>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> AuthResult<(StatusCode, Json<UserResponse>)>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    C: CredentialVerifier + CredentialHasher + Clone,
{
    let Json(req) = payload?;

    let use_case = SignUpUseCase::new(state.users.clone(), state.credentials.clone());
    let user = use_case
        .execute(SignUpInput {
            user_name: req.username,
            name: req.name,
            password: req.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /api/users
pub async fn list_users<U, C>(
    State(state): State<AuthAppState<U, C>>,
) -> AuthResult<Json<Vec<UserResponse>>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    C: CredentialVerifier + CredentialHasher + Clone,
{
    let users = ListUsersUseCase::new(state.users.clone()).execute().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/login
pub async fn login<U, C>(
    State(state): State<AuthAppState<U, C>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<Json<LoginResponse>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    C: CredentialVerifier + CredentialHasher + Clone,
{
    let Json(req) = payload?;

    let use_case = SignInUseCase::new(
        state.users.clone(),
        state.credentials.clone(),
        state.codec.clone(),
    );
    let output = use_case
        .execute(SignInInput {
            user_name: req.username,
            password: req.password,
        })
        .await?;

    Ok(Json(LoginResponse {
        token: output.token,
        username: output.user_name,
        name: output.name,
    }))
}
