//! In-memory repository
//!
//! Blogs kept in insertion order. Each operation takes the lock once, so
//! an update or delete is a single atomic step.

use std::sync::Arc;

use kernel::id::{BlogId, UserId};
use tokio::sync::RwLock;

use crate::domain::entity::blog::{Blog, BlogChanges};
use crate::domain::repository::BlogRepository;
use crate::error::BlogResult;

#[derive(Clone, Default)]
pub struct InMemoryBlogRepository {
    blogs: Arc<RwLock<Vec<Blog>>>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlogRepository for InMemoryBlogRepository {
    async fn create(&self, blog: &Blog) -> BlogResult<()> {
        self.blogs.write().await.push(blog.clone());
        Ok(())
    }

    async fn find_all(&self) -> BlogResult<Vec<Blog>> {
        Ok(self.blogs.read().await.clone())
    }

    async fn find_by_id(&self, blog_id: &BlogId) -> BlogResult<Option<Blog>> {
        let blogs = self.blogs.read().await;
        Ok(blogs.iter().find(|b| &b.blog_id == blog_id).cloned())
    }

    async fn find_by_owner(&self, owner_id: &UserId) -> BlogResult<Vec<Blog>> {
        let blogs = self.blogs.read().await;
        Ok(blogs.iter().filter(|b| b.is_owned_by(owner_id)).cloned().collect())
    }

    async fn update(&self, blog_id: &BlogId, changes: &BlogChanges) -> BlogResult<Option<Blog>> {
        let mut blogs = self.blogs.write().await;
        Ok(blogs.iter_mut().find(|b| &b.blog_id == blog_id).map(|blog| {
            blog.apply(changes);
            blog.clone()
        }))
    }

    async fn delete(&self, blog_id: &BlogId) -> BlogResult<bool> {
        let mut blogs = self.blogs.write().await;
        let before = blogs.len();
        blogs.retain(|b| &b.blog_id != blog_id);
        Ok(blogs.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::blog::NewBlog;

    fn blog(title: &str, owner: UserId) -> Blog {
        Blog::new(
            NewBlog {
                title: title.to_string(),
                author: String::new(),
                url: "http://example.com".to_string(),
                likes: 0,
            },
            owner,
        )
    }

    #[tokio::test]
    async fn test_find_by_owner_keeps_order() {
        let repo = InMemoryBlogRepository::new();
        let (alice, bob) = (UserId::new(), UserId::new());
        for (title, owner) in [("a1", alice), ("b1", bob), ("a2", alice)] {
            repo.create(&blog(title, owner)).await.unwrap();
        }

        let titles: Vec<String> = repo
            .find_by_owner(&alice)
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, ["a1", "a2"]);
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let repo = InMemoryBlogRepository::new();
        let changes = BlogChanges {
            likes: Some(1),
            ..Default::default()
        };
        assert!(repo.update(&BlogId::new(), &changes).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_reports_existence() {
        let repo = InMemoryBlogRepository::new();
        let stored = blog("t", UserId::new());
        repo.create(&stored).await.unwrap();

        assert!(repo.delete(&stored.blog_id).await.unwrap());
        assert!(!repo.delete(&stored.blog_id).await.unwrap());
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
