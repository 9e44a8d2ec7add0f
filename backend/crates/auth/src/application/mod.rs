//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod identity;
pub mod list_users;
pub mod sign_in;
pub mod sign_up;
pub mod token;

// Re-exports
pub use config::AuthConfig;
pub use identity::{CurrentUser, Identity, ResolveIdentityUseCase};
pub use list_users::ListUsersUseCase;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_up::{SignUpInput, SignUpUseCase};
pub use token::TokenCodec;
