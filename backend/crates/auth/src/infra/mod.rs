//! Infrastructure Layer
//!
//! Database implementations and external service integrations.

pub mod credentials;
pub mod memory;
pub mod postgres;

pub use credentials::Argon2Credentials;
pub use memory::InMemoryUserRepository;
pub use postgres::PgUserRepository;
