//! Blog Statistics Use Case

use std::sync::Arc;

use crate::domain::repository::BlogRepository;
use crate::domain::services::stats::BlogStats;
use crate::error::BlogResult;

/// Aggregate statistics over the whole collection
pub struct BlogStatsUseCase<B>
where
    B: BlogRepository,
{
    blog_repo: Arc<B>,
}

impl<B> BlogStatsUseCase<B>
where
    B: BlogRepository,
{
    pub fn new(blog_repo: Arc<B>) -> Self {
        Self { blog_repo }
    }

    pub async fn execute(&self) -> BlogResult<BlogStats> {
        let snapshot = self.blog_repo.find_all().await?;
        Ok(BlogStats::from_blogs(&snapshot))
    }
}
