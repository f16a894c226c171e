use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

const MIN_ADMIN_KEY_LENGTH: usize = 16;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Required `X-Admin-Key` value for `/api/admin/*`; unset leaves them open
    pub api_key: Option<String>,
}

impl AdminConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(key) = &self.api_key
            && key.len() < MIN_ADMIN_KEY_LENGTH
        {
            return Err(ConfigError::admin(format!(
                "admin.api_key must be at least {} characters",
                MIN_ADMIN_KEY_LENGTH
            )));
        }
        Ok(())
    }
}
