//! Update Blog Use Case
//!
//! Checks run in a fixed order and nothing is written unless all pass:
//! identity, id format, payload, existence, ownership.

use std::sync::Arc;

use auth::{AuthError, Identity};
use kernel::id::BlogId;

use crate::application::view::BlogWithOwner;
use crate::domain::entity::blog::{BlogChanges, BlogInput};
use crate::domain::repository::BlogRepository;
use crate::error::{BlogError, BlogResult};

/// Update blog use case
pub struct UpdateBlogUseCase<B>
where
    B: BlogRepository,
{
    blog_repo: Arc<B>,
}

impl<B> UpdateBlogUseCase<B>
where
    B: BlogRepository,
{
    pub fn new(blog_repo: Arc<B>) -> Self {
        Self { blog_repo }
    }

    pub async fn execute(
        &self,
        identity: &Identity,
        raw_id: &str,
        input: BlogInput,
    ) -> BlogResult<BlogWithOwner> {
        let caller = identity.require()?;
        let blog_id = BlogId::parse_str(raw_id)?;
        let changes = BlogChanges::try_from_input(input)?;

        let existing = self
            .blog_repo
            .find_by_id(&blog_id)
            .await?
            .ok_or(BlogError::NotFound)?;

        if !existing.is_owned_by(&caller.user_id) {
            tracing::warn!(blog_id = %blog_id, caller_id = %caller.user_id, "Update by non-owner refused");
            return Err(AuthError::Forbidden.into());
        }

        if changes.is_empty() {
            return Ok(BlogWithOwner {
                blog: existing,
                owner: Some(caller.clone()),
            });
        }

        // Deleted between the read and the write
        let blog = self
            .blog_repo
            .update(&blog_id, &changes)
            .await?
            .ok_or(BlogError::NotFound)?;

        tracing::info!(blog_id = %blog_id, likes = blog.likes, "Blog updated");

        Ok(BlogWithOwner {
            blog,
            owner: Some(caller.clone()),
        })
    }
}
