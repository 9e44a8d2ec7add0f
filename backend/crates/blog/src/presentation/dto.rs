//! API DTOs (Data Transfer Objects)
//!
//! Records leave the service with a single `id` field; internal field
//! names such as `blog_id` or `owner_id` never appear.

use auth::models::UserResponse;
use serde::{Deserialize, Serialize};

use crate::application::BlogWithOwner;
use crate::domain::entity::blog::BlogInput;
use crate::domain::services::stats::{AuthorBlogs, AuthorLikes, BlogStats, FavoriteBlog};

// ============================================================================
// Blogs
// ============================================================================

/// Create / update request. Unknown fields, including `user`, are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

impl From<BlogRequest> for BlogInput {
    fn from(req: BlogRequest) -> Self {
        Self {
            title: req.title,
            author: req.author,
            url: req.url,
            likes: req.likes,
        }
    }
}

/// Blog as returned to clients
#[derive(Debug, Clone, Serialize)]
pub struct BlogResponse {
    pub id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
    pub user: Option<UserResponse>,
}

impl From<BlogWithOwner> for BlogResponse {
    fn from(view: BlogWithOwner) -> Self {
        let BlogWithOwner { blog, owner } = view;
        Self {
            id: blog.blog_id.to_string(),
            title: blog.title,
            author: blog.author,
            url: blog.url,
            likes: blog.likes,
            user: owner.map(UserResponse::from),
        }
    }
}

// ============================================================================
// Statistics
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct FavoriteBlogResponse {
    pub title: String,
    pub author: String,
    pub likes: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthorBlogsResponse {
    pub author: String,
    pub blogs: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthorLikesResponse {
    pub author: String,
    pub likes: i128,
}

/// Aggregates; the optional parts are `null` for an empty collection
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogStatsResponse {
    pub total_likes: i128,
    pub favorite_blog: Option<FavoriteBlogResponse>,
    pub most_blogs: Option<AuthorBlogsResponse>,
    pub most_likes: Option<AuthorLikesResponse>,
}

impl From<BlogStats> for BlogStatsResponse {
    fn from(stats: BlogStats) -> Self {
        Self {
            total_likes: stats.total_likes,
            favorite_blog: stats.favorite_blog.map(|FavoriteBlog { title, author, likes }| {
                FavoriteBlogResponse {
                    title,
                    author,
                    likes,
                }
            }),
            most_blogs: stats
                .most_blogs
                .map(|AuthorBlogs { author, blogs }| AuthorBlogsResponse { author, blogs }),
            most_likes: stats
                .most_likes
                .map(|AuthorLikes { author, likes }| AuthorLikesResponse { author, likes }),
        }
    }
}
