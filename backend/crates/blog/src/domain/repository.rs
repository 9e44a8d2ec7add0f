//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{BlogId, UserId};

use crate::domain::entity::blog::{Blog, BlogChanges};
use crate::error::BlogResult;

/// Blog repository trait
#[trait_variant::make(BlogRepository: Send)]
pub trait LocalBlogRepository {
    /// Insert a new blog
    async fn create(&self, blog: &Blog) -> BlogResult<()>;

    /// All blogs in insertion order
    async fn find_all(&self) -> BlogResult<Vec<Blog>>;

    /// Find blog by ID
    async fn find_by_id(&self, blog_id: &BlogId) -> BlogResult<Option<Blog>>;

    /// Blogs created by a user, in insertion order
    async fn find_by_owner(&self, owner_id: &UserId) -> BlogResult<Vec<Blog>>;

    /// Apply changes in a single write; `None` if the blog no longer exists
    async fn update(&self, blog_id: &BlogId, changes: &BlogChanges) -> BlogResult<Option<Blog>>;

    /// Remove a blog; `false` if it did not exist
    async fn delete(&self, blog_id: &BlogId) -> BlogResult<bool>;
}
