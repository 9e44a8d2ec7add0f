//! Domain Entities

pub mod blog;
