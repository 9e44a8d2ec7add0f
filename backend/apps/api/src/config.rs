//! Process configuration
//!
//! Read once from the environment at startup. Nothing here is consulted
//! again after the server starts.

use std::env;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use base64::Engine;
use base64::engine::general_purpose;

const DEFAULT_PORT: u16 = 3003;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:5173,http://127.0.0.1:5173";
const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    /// `None` runs against in-memory repositories
    pub database_url: Option<String>,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().context("PORT must be a port number")?,
            None => DEFAULT_PORT,
        };

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        let token_secret = match lookup("TOKEN_SECRET") {
            Some(secret_b64) => decode_secret(&secret_b64)?,
            None if cfg!(debug_assertions) => {
                tracing::warn!("TOKEN_SECRET not set, using a random development key");
                AuthConfig::with_random_secret().token_secret
            }
            None => bail!("TOKEN_SECRET must be set in production"),
        };

        let token_ttl_secs = match lookup("TOKEN_TTL_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .context("TOKEN_TTL_SECS must be a non-negative integer")?,
            None => DEFAULT_TOKEN_TTL_SECS,
        };
        if i64::try_from(token_ttl_secs).is_err() {
            bail!("TOKEN_TTL_SECS must be at most {}", i64::MAX);
        }
        let token_ttl = (token_ttl_secs > 0).then(|| Duration::from_secs(token_ttl_secs));

        let password_pepper = lookup("PASSWORD_PEPPER")
            .filter(|p| !p.is_empty())
            .map(String::into_bytes);

        Ok(Self {
            port,
            database_url,
            frontend_origins,
            auth: AuthConfig {
                token_secret,
                token_ttl,
                password_pepper,
            },
        })
    }
}

fn decode_secret(secret_b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = general_purpose::STANDARD
        .decode(secret_b64.trim())
        .context("TOKEN_SECRET must be base64")?;
    bytes
        .try_into()
        .map_err(|bytes: Vec<u8>| anyhow::anyhow!("TOKEN_SECRET must decode to 32 bytes, got {}", bytes.len()))
}
