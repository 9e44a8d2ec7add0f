//! List User Blogs Use Case
//!
//! The blogs a user owns are derived by query, never stored on the user.

use std::sync::Arc;

use auth::CurrentUser;
use auth::domain::repository::UserRepository;
use kernel::id::UserId;

use crate::application::view::BlogWithOwner;
use crate::domain::repository::BlogRepository;
use crate::error::{BlogError, BlogResult};

/// List blogs owned by one user
pub struct ListUserBlogsUseCase<B, U>
where
    B: BlogRepository,
    U: UserRepository,
{
    blog_repo: Arc<B>,
    user_repo: Arc<U>,
}

impl<B, U> ListUserBlogsUseCase<B, U>
where
    B: BlogRepository,
    U: UserRepository,
{
    pub fn new(blog_repo: Arc<B>, user_repo: Arc<U>) -> Self {
        Self {
            blog_repo,
            user_repo,
        }
    }

    pub async fn execute(&self, raw_user_id: &str) -> BlogResult<Vec<BlogWithOwner>> {
        let user_id = UserId::parse_str(raw_user_id)?;

        let owner: CurrentUser = self
            .user_repo
            .find_by_id(&user_id)
            .await?
            .ok_or(BlogError::NotFound)?
            .into();

        let blogs = self.blog_repo.find_by_owner(&user_id).await?;

        Ok(blogs
            .into_iter()
            .map(|blog| BlogWithOwner {
                blog,
                owner: Some(owner.clone()),
            })
            .collect())
    }
}
