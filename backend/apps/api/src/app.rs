//! Router composition
//!
//! Every route lives under `/api` behind the auth context middleware.

use std::sync::Arc;

use auth::domain::credential::{CredentialHasher, CredentialVerifier};
use auth::domain::repository::UserRepository;
use auth::{AuthContextState, TokenCodec, auth_router_generic, resolve_auth_context};
use axum::http::StatusCode;
use axum::{Json, Router, middleware};
use blog::blog_router_generic;
use blog::domain::repository::BlogRepository;
use serde_json::{Value, json};

/// Build the full API for the given repositories and credential scheme
pub fn build_app<U, C, B>(users: U, credentials: C, blogs: B, codec: Arc<TokenCodec>) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
    C: CredentialVerifier + CredentialHasher + Clone,
    B: BlogRepository + Clone + Send + Sync + 'static,
{
    let context = AuthContextState {
        users: Arc::new(users.clone()),
        codec: codec.clone(),
    };

    let api = auth_router_generic(users.clone(), credentials, codec)
        .merge(blog_router_generic(blogs, users));

    Router::new()
        .nest("/api", api)
        .fallback(unknown_endpoint)
        .layer(middleware::from_fn_with_state(
            context,
            resolve_auth_context::<U>,
        ))
}

async fn unknown_endpoint() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "unknown endpoint" })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::{Argon2Credentials, AuthConfig, InMemoryUserRepository};
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use blog::InMemoryBlogRepository;
    use tower::ServiceExt;

    fn app() -> Router {
        let config = AuthConfig::with_random_secret();
        build_app(
            InMemoryUserRepository::new(),
            Argon2Credentials::from_config(&config),
            InMemoryBlogRepository::new(),
            Arc::new(TokenCodec::new(&config)),
        )
    }

    async fn call(
        app: &Router,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_unknown_endpoint() {
        let (status, body) = call(&app(), "GET", "/api/nothing-here", None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "unknown endpoint" }));
    }

    #[tokio::test]
    async fn test_register_login_create_flow() {
        let app = app();

        let (status, _) = call(
            &app,
            "POST",
            "/api/users",
            None,
            Some(json!({"username": "mluukkai", "name": "Matti", "password": "salainen-sana"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, login) = call(
            &app,
            "POST",
            "/api/login",
            None,
            Some(json!({"username": "mluukkai", "password": "salainen-sana"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let token = login["token"].as_str().unwrap().to_string();

        let (status, created) = call(
            &app,
            "POST",
            "/api/blogs",
            Some(&token),
            Some(json!({"title": "Type wars", "author": "Robert C. Martin", "url": "http://blog.cleancoder.com/"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["user"]["username"], "mluukkai");

        let (_, blogs) = call(&app, "GET", "/api/blogs", None, None).await;
        assert_eq!(blogs.as_array().unwrap().len(), 1);
    }
}
