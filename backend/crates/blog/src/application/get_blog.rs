//! Get Blog Use Case

use std::sync::Arc;

use auth::domain::repository::UserRepository;
use kernel::id::BlogId;

use crate::application::view::{BlogWithOwner, resolve_owner};
use crate::domain::repository::BlogRepository;
use crate::error::{BlogError, BlogResult};

/// Get blog use case
pub struct GetBlogUseCase<B, U>
where
    B: BlogRepository,
    U: UserRepository,
{
    blog_repo: Arc<B>,
    user_repo: Arc<U>,
}

impl<B, U> GetBlogUseCase<B, U>
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

    pub async fn execute(&self, raw_id: &str) -> BlogResult<BlogWithOwner> {
        let blog_id = BlogId::parse_str(raw_id)?;

        let blog = self
            .blog_repo
            .find_by_id(&blog_id)
            .await?
            .ok_or(BlogError::NotFound)?;
        let owner = resolve_owner(self.user_repo.as_ref(), &blog.owner_id).await?;

        Ok(BlogWithOwner { blog, owner })
    }
}
