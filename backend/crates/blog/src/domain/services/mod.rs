//! Domain Services
//!
//! Pure computations over already-fetched domain data.

pub mod stats;

pub use stats::{AuthorBlogs, AuthorLikes, BlogStats, FavoriteBlog};
