//! Application Configuration
//!
//! Configuration for the Auth application layer. Built once at startup and
//! shared read-only behind an `Arc`.

use std::time::Duration;

/// Scheme marker expected at the start of the `Authorization` header
pub const BEARER_PREFIX: &str = "Bearer ";

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Token signing key for HMAC-SHA256 (32 bytes)
    pub token_secret: [u8; 32],
    /// Maximum token age; `None` disables the expiry check
    pub token_ttl: Option<Duration>,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: [0u8; 32],
            token_ttl: Some(Duration::from_secs(3600)), // 1 hour
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        Self {
            token_secret: platform::crypto::random_secret(),
            ..Default::default()
        }
    }

    /// Get token TTL in seconds, if configured; saturates at `i64::MAX`
    pub fn token_ttl_secs(&self) -> Option<i64> {
        self.token_ttl
            .map(|ttl| i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX))
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_secret_differs() {
        let a = AuthConfig::with_random_secret();
        let b = AuthConfig::with_random_secret();
        assert_ne!(a.token_secret, b.token_secret);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = AuthConfig {
            password_pepper: Some(b"pepper".to_vec()),
            ..AuthConfig::with_random_secret()
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains(&format!("{:?}", b"pepper".to_vec())));
    }

    #[test]
    fn test_ttl_secs() {
        assert_eq!(AuthConfig::default().token_ttl_secs(), Some(3600));
        let no_expiry = AuthConfig {
            token_ttl: None,
            ..AuthConfig::default()
        };
        assert_eq!(no_expiry.token_ttl_secs(), None);
    }

    #[test]
    fn test_huge_ttl_saturates() {
        let config = AuthConfig {
            token_ttl: Some(Duration::from_secs(u64::MAX)),
            ..AuthConfig::default()
        };
        assert_eq!(config.token_ttl_secs(), Some(i64::MAX));
    }
}
