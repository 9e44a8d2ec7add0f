//! Create Blog Use Case

use std::sync::Arc;

use auth::Identity;

use crate::application::view::BlogWithOwner;
use crate::domain::entity::blog::{Blog, BlogInput, NewBlog};
use crate::domain::repository::BlogRepository;
use crate::error::BlogResult;

/// Create blog use case
pub struct CreateBlogUseCase<B>
where
    B: BlogRepository,
{
    blog_repo: Arc<B>,
}

impl<B> CreateBlogUseCase<B>
where
    B: BlogRepository,
{
    pub fn new(blog_repo: Arc<B>) -> Self {
        Self { blog_repo }
    }

    /// The caller becomes the owner
    pub async fn execute(&self, identity: &Identity, input: BlogInput) -> BlogResult<BlogWithOwner> {
        let caller = identity.require()?;
        let fields = NewBlog::try_from_input(input)?;

        let blog = Blog::new(fields, caller.user_id);
        self.blog_repo.create(&blog).await?;

        tracing::info!(blog_id = %blog.blog_id, owner_id = %caller.user_id, "Blog created");

        Ok(BlogWithOwner {
            blog,
            owner: Some(caller.clone()),
        })
    }
}
