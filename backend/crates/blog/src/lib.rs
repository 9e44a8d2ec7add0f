//! Blog Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Blog entity, validation, repository trait, aggregation
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Reads are public. Create requires an authenticated caller; update and
//! delete additionally require the caller to own the blog. The caller is
//! resolved by `auth`'s context middleware and passed explicitly into
//! each use case.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use domain::services::stats;
pub use error::{BlogError, BlogResult};
pub use infra::{InMemoryBlogRepository, PgBlogRepository};
pub use presentation::router::{blog_router, blog_router_generic};
