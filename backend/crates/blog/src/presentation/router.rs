//! Blog Router

use axum::{Router, routing::get};
use std::sync::Arc;

use auth::PgUserRepository;
use auth::domain::repository::UserRepository;

use crate::domain::repository::BlogRepository;
use crate::infra::postgres::PgBlogRepository;
use crate::presentation::handlers::{self, BlogAppState};

/// Create the Blog router with PostgreSQL repositories
pub fn blog_router(blogs: PgBlogRepository, users: PgUserRepository) -> Router {
    blog_router_generic(blogs, users)
}

/// Create a generic Blog router for any repository implementation
///
/// Handlers read the caller from request extensions, so the auth context
/// middleware must be layered around this router.
pub fn blog_router_generic<B, U>(blogs: B, users: U) -> Router
where
    B: BlogRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let state = BlogAppState {
        blogs: Arc::new(blogs),
        users: Arc::new(users),
    };

    Router::new()
        .route(
            "/blogs",
            get(handlers::list_blogs::<B, U>).post(handlers::create_blog::<B, U>),
        )
        .route("/blogs/stats", get(handlers::blog_stats::<B, U>))
        .route(
            "/blogs/{id}",
            get(handlers::get_blog::<B, U>)
                .put(handlers::update_blog::<B, U>)
                .delete(handlers::delete_blog::<B, U>),
        )
        .route("/users/{id}/blogs", get(handlers::list_user_blogs::<B, U>))
        .with_state(state)
}
