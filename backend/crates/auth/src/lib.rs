//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases, token codec, identity resolution
//! - `infra/` - Database implementations, credential hashing
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - User registration and listing
//! - Username + password login issuing a signed bearer token
//! - Per-request identity resolution from the `Authorization` header
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional application pepper
//! - Tokens are HMAC-SHA256 signed; the signature is checked before the
//!   payload is read
//! - Unknown user and wrong password produce the same failure

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::{CurrentUser, Identity, TokenCodec};
pub use error::{AuthError, AuthResult};
pub use infra::{Argon2Credentials, InMemoryUserRepository, PgUserRepository};
pub use presentation::middleware::{AuthContextState, resolve_auth_context};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
