//! Domain Layer
//!
//! Contains entities, value objects, repository traits and the credential
//! verification contract.

pub mod credential;
pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use credential::{CredentialHasher, CredentialVerifier};
pub use entity::user::User;
pub use repository::UserRepository;
