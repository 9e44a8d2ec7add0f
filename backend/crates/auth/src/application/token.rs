//! Identity Token Codec
//!
//! Stateless HS256 JWTs binding a user ID and an issuance time. The key and
//! the expiry policy are fixed at construction.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use kernel::id::UserId;
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// Tolerated clock drift, applied to `exp` and to future-dated `iat`
const CLOCK_SKEW_SECS: i64 = 60;

/// JWT claims
#[derive(Debug, Serialize, Deserialize)]
struct TokenClaims {
    /// Subject (user ID)
    sub: String,
    /// Issued at (unix seconds)
    iat: i64,
    /// Expiration (unix seconds); omitted when tokens never expire
    #[serde(default, skip_serializing_if = "Option::is_none")]
    exp: Option<i64>,
}

/// Issues and verifies bearer tokens
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: Option<i64>,
}

impl TokenCodec {
    pub fn new(config: &AuthConfig) -> Self {
        let ttl_secs = config.token_ttl_secs();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = CLOCK_SKEW_SECS as u64;
        if ttl_secs.is_none() {
            validation.validate_exp = false;
            validation.required_spec_claims.clear();
        }

        Self {
            encoding_key: EncodingKey::from_secret(&config.token_secret),
            decoding_key: DecodingKey::from_secret(&config.token_secret),
            validation,
            ttl_secs,
        }
    }

    pub fn issue(&self, user_id: &UserId) -> AuthResult<String> {
        self.issue_at(user_id, Utc::now())
    }

    pub fn issue_at(&self, user_id: &UserId, issued_at: DateTime<Utc>) -> AuthResult<String> {
        let iat = issued_at.timestamp();
        let claims = TokenClaims {
            sub: user_id.to_string(),
            iat,
            exp: self.ttl_secs.map(|ttl| iat.saturating_add(ttl)),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Failed to encode token: {e}")))
    }

    pub fn verify(&self, token: &str) -> AuthResult<UserId> {
        let token = token.trim();
        if token.is_empty() {
            return Err(AuthError::MissingToken);
        }

        let claims = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!(error = %e, "Token rejected");
                AuthError::InvalidToken
            })?
            .claims;

        if claims.iat - Utc::now().timestamp() > CLOCK_SKEW_SECS {
            tracing::debug!(iat = claims.iat, "Token issued in the future");
            return Err(AuthError::InvalidToken);
        }

        UserId::parse_str(&claims.sub).map_err(|_| AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn codec() -> TokenCodec {
        TokenCodec::new(&AuthConfig::with_random_secret())
    }

    #[test]
    fn test_issue_then_verify_recovers_user() {
        let codec = codec();
        let user_id = UserId::new();
        let token = codec.issue(&user_id).unwrap();
        assert_eq!(codec.verify(&token).unwrap(), user_id);
    }

    #[test]
    fn test_empty_token_is_missing() {
        let codec = codec();
        assert!(matches!(codec.verify(""), Err(AuthError::MissingToken)));
        assert!(matches!(codec.verify("   "), Err(AuthError::MissingToken)));
    }

    #[test]
    fn test_garbage_is_invalid() {
        let codec = codec();
        for garbage in ["abc", "a.b", "a.b.c", "....", "eyJzdWIiOiJ4In0.!!!"] {
            assert!(
                matches!(codec.verify(garbage), Err(AuthError::InvalidToken)),
                "{garbage}"
            );
        }
    }

    #[test]
    fn test_other_key_is_invalid() {
        let token = codec().issue(&UserId::new()).unwrap();
        assert!(matches!(codec().verify(&token), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_swapped_payload_is_invalid() {
        let codec = codec();
        let victim = codec.issue(&UserId::new()).unwrap();
        let attacker = codec.issue(&UserId::new()).unwrap();

        let victim_parts: Vec<&str> = victim.split('.').collect();
        let attacker_parts: Vec<&str> = attacker.split('.').collect();
        let forged = format!(
            "{}.{}.{}",
            victim_parts[0], victim_parts[1], attacker_parts[2]
        );

        assert!(matches!(codec.verify(&forged), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_other_algorithm_is_invalid() {
        let codec = codec();
        let claims = TokenClaims {
            sub: UserId::new().to_string(),
            iat: Utc::now().timestamp(),
            exp: Some(Utc::now().timestamp() + 600),
        };
        let token = encode(&Header::new(Algorithm::HS512), &claims, &codec.encoding_key).unwrap();
        assert!(matches!(codec.verify(&token), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_signed_but_non_uuid_subject_is_invalid() {
        let codec = codec();
        let claims = TokenClaims {
            sub: "5a422aa71b54a676234d17f8".to_string(),
            iat: Utc::now().timestamp(),
            exp: Some(Utc::now().timestamp() + 600),
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &codec.encoding_key).unwrap();
        assert!(matches!(codec.verify(&token), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_missing_exp_is_invalid_when_ttl_configured() {
        let codec = codec();
        let claims = TokenClaims {
            sub: UserId::new().to_string(),
            iat: Utc::now().timestamp(),
            exp: None,
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &codec.encoding_key).unwrap();
        assert!(matches!(codec.verify(&token), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_expired_token_is_invalid() {
        let codec = codec();
        let user_id = UserId::new();

        let stale = codec
            .issue_at(&user_id, Utc::now() - Duration::hours(2))
            .unwrap();
        assert!(matches!(codec.verify(&stale), Err(AuthError::InvalidToken)));

        let fresh = codec
            .issue_at(&user_id, Utc::now() - Duration::minutes(59))
            .unwrap();
        assert_eq!(codec.verify(&fresh).unwrap(), user_id);
    }

    #[test]
    fn test_expiry_tolerates_clock_skew() {
        let codec = codec();
        let user_id = UserId::new();
        // exp passed 30 seconds ago, inside the leeway
        let token = codec
            .issue_at(&user_id, Utc::now() - Duration::seconds(3630))
            .unwrap();
        assert_eq!(codec.verify(&token).unwrap(), user_id);
    }

    #[test]
    fn test_future_token_is_invalid() {
        let codec = codec();
        let token = codec
            .issue_at(&UserId::new(), Utc::now() + Duration::hours(1))
            .unwrap();
        assert!(matches!(codec.verify(&token), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_no_ttl_accepts_old_tokens() {
        let config = AuthConfig {
            token_ttl: None,
            ..AuthConfig::with_random_secret()
        };
        let codec = TokenCodec::new(&config);
        let user_id = UserId::new();
        let token = codec
            .issue_at(&user_id, Utc::now() - Duration::days(365))
            .unwrap();
        assert_eq!(codec.verify(&token).unwrap(), user_id);
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        let codec = codec();
        let user_id = UserId::new();
        let token = codec.issue(&user_id).unwrap();
        assert_eq!(codec.verify(&format!(" {token}\t")).unwrap(), user_id);
    }
}
