//! Delete Blog Use Case

use std::sync::Arc;

use auth::{AuthError, Identity};
use kernel::id::BlogId;

use crate::domain::repository::BlogRepository;
use crate::error::{BlogError, BlogResult};

/// Delete blog use case
pub struct DeleteBlogUseCase<B>
where
    B: BlogRepository,
{
    blog_repo: Arc<B>,
}

impl<B> DeleteBlogUseCase<B>
where
    B: BlogRepository,
{
    pub fn new(blog_repo: Arc<B>) -> Self {
        Self { blog_repo }
    }

    /// Same ownership gate as update
    pub async fn execute(&self, identity: &Identity, raw_id: &str) -> BlogResult<()> {
        let caller = identity.require()?;
        let blog_id = BlogId::parse_str(raw_id)?;

        let existing = self
            .blog_repo
            .find_by_id(&blog_id)
            .await?
            .ok_or(BlogError::NotFound)?;

        if !existing.is_owned_by(&caller.user_id) {
            tracing::warn!(blog_id = %blog_id, caller_id = %caller.user_id, "Delete by non-owner refused");
            return Err(AuthError::Forbidden.into());
        }

        if !self.blog_repo.delete(&blog_id).await? {
            return Err(BlogError::NotFound);
        }

        tracing::info!(blog_id = %blog_id, "Blog deleted");

        Ok(())
    }
}
