//! Auth Context Middleware
//!
//! Resolves the caller from the `Authorization` header and stores the
//! resulting [`Identity`] in request extensions. Handlers read it back
//! through the [`Identity`] extractor.

use std::convert::Infallible;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::{FromRequestParts, State};
use axum::http::request::Parts;
use axum::http::{Request, header};
use axum::middleware::Next;
use axum::response::Response;

use crate::application::{Identity, ResolveIdentityUseCase, TokenCodec};
use crate::domain::repository::UserRepository;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthContextState<U>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    pub users: Arc<U>,
    pub codec: Arc<TokenCodec>,
}

/// Attach an [`Identity`] to every request
///
/// Use with `axum::middleware::from_fn_with_state`. A bearer token that
/// fails verification ends the request with 401.
pub async fn resolve_auth_context<U>(
    State(state): State<AuthContextState<U>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    // Non UTF-8 header values count as absent
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let use_case = ResolveIdentityUseCase::new(state.users.clone(), state.codec.clone());
    let identity = use_case.execute(authorization).await?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<Identity>()
            .cloned()
            .unwrap_or_default())
    }
}
