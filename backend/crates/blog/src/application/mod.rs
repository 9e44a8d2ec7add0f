//! Application Layer
//!
//! Use cases and application services.

pub mod blog_stats;
pub mod create_blog;
pub mod delete_blog;
pub mod get_blog;
pub mod list_blogs;
pub mod list_user_blogs;
pub mod update_blog;
pub mod view;

// Re-exports
pub use blog_stats::BlogStatsUseCase;
pub use create_blog::CreateBlogUseCase;
pub use delete_blog::DeleteBlogUseCase;
pub use get_blog::GetBlogUseCase;
pub use list_blogs::ListBlogsUseCase;
pub use list_user_blogs::ListUserBlogsUseCase;
pub use update_blog::UpdateBlogUseCase;
pub use view::BlogWithOwner;
