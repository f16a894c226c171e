use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SESSION_TTL_SECS, MAX_SESSION_TTL_SECS,
    MIN_JWT_SECRET_LENGTH, MIN_SESSION_TTL_SECS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret for session tokens
    pub jwt_secret: Option<String>,
    pub session_ttl_secs: u64,
    /// Server-held input to wallet key derivation
    pub wallet_secret: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
            wallet_secret: None,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.jwt_secret.as_deref() {
            None => {
                return Err(ConfigError::auth(
                    "auth.jwt_secret is required (set VG_AUTH_JWT_SECRET)",
                ));
            }
            Some(secret) if secret.len() < MIN_JWT_SECRET_LENGTH => {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} characters",
                    MIN_JWT_SECRET_LENGTH
                )));
            }
            Some(_) => {}
        }

        if !(MIN_SESSION_TTL_SECS..=MAX_SESSION_TTL_SECS).contains(&self.session_ttl_secs) {
            return Err(ConfigError::auth(format!(
                "auth.session_ttl_secs must be {}-{}, got {}",
                MIN_SESSION_TTL_SECS, MAX_SESSION_TTL_SECS, self.session_ttl_secs
            )));
        }

        if self.wallet_secret.as_deref().is_none_or(|s| s.is_empty()) {
            return Err(ConfigError::auth(
                "auth.wallet_secret is required (set VG_AUTH_WALLET_SECRET)",
            ));
        }

        Ok(())
    }
}
