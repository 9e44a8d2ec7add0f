//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;

use auth::Identity;
use auth::domain::repository::UserRepository;

use crate::application::{
    BlogStatsUseCase, CreateBlogUseCase, DeleteBlogUseCase, GetBlogUseCase, ListBlogsUseCase,
    ListUserBlogsUseCase, UpdateBlogUseCase,
};
use crate::domain::repository::BlogRepository;
use crate::error::BlogResult;
use crate::presentation::dto::{BlogRequest, BlogResponse, BlogStatsResponse};

/// Shared state for blog handlers
#[derive(Clone)]
pub struct BlogAppState<B, U>
where
    B: BlogRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    pub blogs: Arc<B>,
    pub users: Arc<U>,
}

// ============================================================================
// Reads
// ============================================================================

/// GET /api/blogs
pub async fn list_blogs<B, U>(
    State(state): State<BlogAppState<B, U>>,
) -> BlogResult<Json<Vec<BlogResponse>>>
where
    B: BlogRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListBlogsUseCase::new(state.blogs.clone(), state.users.clone());
    let blogs = use_case.execute().await?;
    Ok(Json(blogs.into_iter().map(BlogResponse::from).collect()))
}

/// GET /api/blogs/{id}
pub async fn get_blog<B, U>(
    State(state): State<BlogAppState<B, U>>,
    Path(id): Path<String>,
) -> BlogResult<Json<BlogResponse>>
where
    B: BlogRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetBlogUseCase::new(state.blogs.clone(), state.users.clone());
    Ok(Json(use_case.execute(&id).await?.into()))
}

/// GET /api/blogs/stats
pub async fn blog_stats<B, U>(
    State(state): State<BlogAppState<B, U>>,
) -> BlogResult<Json<BlogStatsResponse>>
where
    B: BlogRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let stats = BlogStatsUseCase::new(state.blogs.clone()).execute().await?;
    Ok(Json(stats.into()))
}

/// GET /api/users/{id}/blogs
pub async fn list_user_blogs<B, U>(
    State(state): State<BlogAppState<B, U>>,
    Path(id): Path<String>,
) -> BlogResult<Json<Vec<BlogResponse>>>
where
    B: BlogRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListUserBlogsUseCase::new(state.blogs.clone(), state.users.clone());
    let blogs = use_case.execute(&id).await?;
    Ok(Json(blogs.into_iter().map(BlogResponse::from).collect()))
}

// ============================================================================
// Mutations
// ============================================================================

/// POST /api/blogs
pub async fn create_blog<B, U>(
    State(state): State<BlogAppState<B, U>>,
    identity: Identity,
    payload: Result<Json<BlogRequest>, JsonRejection>,
) -> BlogResult<(StatusCode, Json<BlogResponse>)>
where
    B: BlogRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    // Anonymous callers get 401 even when the body is unreadable
    identity.require()?;
    let Json(req) = payload?;

    let use_case = CreateBlogUseCase::new(state.blogs.clone());
    let created = use_case.execute(&identity, req.into()).await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// PUT /api/blogs/{id}
pub async fn update_blog<B, U>(
    State(state): State<BlogAppState<B, U>>,
    identity: Identity,
    Path(id): Path<String>,
    payload: Result<Json<BlogRequest>, JsonRejection>,
) -> BlogResult<Json<BlogResponse>>
where
    B: BlogRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    identity.require()?;
    let Json(req) = payload?;

    let use_case = UpdateBlogUseCase::new(state.blogs.clone());
    let updated = use_case.execute(&identity, &id, req.into()).await?;

    Ok(Json(updated.into()))
}

/// DELETE /api/blogs/{id}
pub async fn delete_blog<B, U>(
    State(state): State<BlogAppState<B, U>>,
    identity: Identity,
    Path(id): Path<String>,
) -> BlogResult<StatusCode>
where
    B: BlogRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    DeleteBlogUseCase::new(state.blogs.clone())
        .execute(&identity, &id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
