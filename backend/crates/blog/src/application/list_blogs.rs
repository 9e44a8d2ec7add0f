//! List Blogs Use Case
//!
//! Public listing; no identity required.

use std::collections::HashMap;
use std::sync::Arc;

use auth::CurrentUser;
use auth::domain::repository::UserRepository;

use crate::application::view::BlogWithOwner;
use crate::domain::repository::BlogRepository;
use crate::error::BlogResult;

/// List blogs use case
pub struct ListBlogsUseCase<B, U>
where
    B: BlogRepository,
    U: UserRepository,
{
    blog_repo: Arc<B>,
    user_repo: Arc<U>,
}

impl<B, U> ListBlogsUseCase<B, U>
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

    pub async fn execute(&self) -> BlogResult<Vec<BlogWithOwner>> {
        let blogs = self.blog_repo.find_all().await?;
        let owners: HashMap<_, CurrentUser> = self
            .user_repo
            .find_all()
            .await?
            .into_iter()
            .map(|user| (user.user_id, CurrentUser::from(user)))
            .collect();

        tracing::debug!(count = blogs.len(), "Listed blogs");

        Ok(blogs
            .into_iter()
            .map(|blog| {
                let owner = owners.get(&blog.owner_id).cloned();
                BlogWithOwner { blog, owner }
            })
            .collect())
    }
}
