//! Cryptographic Utilities

use rand::{RngCore, rngs::OsRng};

/// Generate a 32-byte signing secret
pub fn random_secret() -> [u8; 32] {
    let mut secret = [0u8; 32];
    OsRng.fill_bytes(&mut secret);
    secret
}
