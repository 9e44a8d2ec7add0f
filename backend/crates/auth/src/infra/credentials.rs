//! Argon2id credential hashing and verification

use platform::password::{ClearTextPassword, HashedPassword};

use crate::application::config::AuthConfig;
use crate::domain::credential::{CredentialHasher, CredentialVerifier};
use crate::error::{AuthError, AuthResult};

/// Argon2id-backed credentials with an optional application pepper
#[derive(Clone, Default)]
pub struct Argon2Credentials {
    pepper: Option<Vec<u8>>,
}

impl Argon2Credentials {
    pub fn new(pepper: Option<Vec<u8>>) -> Self {
        Self { pepper }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.pepper().map(<[u8]>::to_vec))
    }
}

impl CredentialVerifier for Argon2Credentials {
    fn verify(&self, secret: &str, stored_hash: &str) -> bool {
        let Ok(hashed) = HashedPassword::from_phc_string(stored_hash) else {
            tracing::warn!("Stored credential hash is not a valid PHC string");
            return false;
        };
        let password = ClearTextPassword::for_verification(secret.to_string());
        hashed.verify(&password, self.pepper.as_deref())
    }
}

impl CredentialHasher for Argon2Credentials {
    fn hash(&self, password: &ClearTextPassword) -> AuthResult<String> {
        password
            .hash(self.pepper.as_deref())
            .map(|hashed| hashed.as_phc_string().to_string())
            .map_err(|e| AuthError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let credentials = Argon2Credentials::new(Some(b"pepper".to_vec()));
        let password = ClearTextPassword::new("correct horse battery".to_string()).unwrap();
        let stored = credentials.hash(&password).unwrap();

        assert!(stored.starts_with("$argon2id$"));
        assert!(credentials.verify("correct horse battery", &stored));
        assert!(!credentials.verify("correct horse battery!", &stored));
        assert!(!Argon2Credentials::default().verify("correct horse battery", &stored));
    }

    #[test]
    fn test_malformed_hash_fails_closed() {
        let credentials = Argon2Credentials::default();
        assert!(!credentials.verify("anything", ""));
        assert!(!credentials.verify("anything", "$2b$10$notargon"));
        assert!(!credentials.verify("anything", "plaintext"));
    }
}
