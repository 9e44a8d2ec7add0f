//! Domain Layer
//!
//! Entities, repository traits, and pure domain services.

pub mod entity;
pub mod repository;
pub mod services;

pub use entity::blog::{Blog, BlogChanges, BlogInput, NewBlog};
pub use repository::BlogRepository;
