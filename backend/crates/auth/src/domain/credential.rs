//! Credential Verification Contract
//!
//! The hashing primitive is a collaborator; the domain only fixes how it
//! is called.

use platform::password::ClearTextPassword;

use crate::error::AuthResult;

/// One-way credential check
///
/// `verify` never fails: a stored hash it cannot interpret is a non-match.
pub trait CredentialVerifier: Send + Sync + 'static {
    fn verify(&self, secret: &str, stored_hash: &str) -> bool;
}

/// Produces the stored form of a credential at registration
pub trait CredentialHasher: Send + Sync + 'static {
    fn hash(&self, password: &ClearTextPassword) -> AuthResult<String>;
}
