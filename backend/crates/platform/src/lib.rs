//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (random signing secrets)
//! - Password hashing (Argon2id, NIST SP 800-63B compliant)

pub mod crypto;
pub mod password;
