use crate::{
    AdminConfig, AuthConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR_NAME, DatabaseConfig, LedgerConfig, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub ledger: LedgerConfig,
    pub admin: AdminConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. `VG_CONFIG_DIR` env var, else `./.vg/`
    /// 2. Auto-create the config directory
    /// 3. `config.toml` if it exists, else defaults
    /// 4. `VG_*` environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: VG_CONFIG_DIR env var > ./.vg/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.ledger.validate()?;
        self.admin.validate()?;
        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Get absolute path to the log directory.
    pub fn log_dir(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.logging.dir))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);
        info!(
            "  auth: session_ttl={}s, jwt_secret={}, wallet_secret={}",
            self.auth.session_ttl_secs,
            presence(self.auth.jwt_secret.is_some()),
            presence(self.auth.wallet_secret.is_some())
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );

        if self.ledger.is_enabled() {
            info!(
                "  ledger: {} package={} module={} gas_budget={} fee_allowance={} MIST",
                self.ledger.rpc_url,
                self.ledger.package_id,
                self.ledger.module,
                self.ledger.gas_budget,
                self.ledger.fee_allowance_mist
            );
        } else {
            warn!("  ledger: disabled (no admin_private_key); ticket issuance will fail");
        }

        info!(
            "  admin: {}",
            if self.admin.api_key.is_some() {
                "X-Admin-Key required"
            } else {
                "open"
            }
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("VG_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("VG_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("VG_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_option_string("VG_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("VG_AUTH_SESSION_TTL_SECS", &mut self.auth.session_ttl_secs);
        Self::apply_env_option_string("VG_AUTH_WALLET_SECRET", &mut self.auth.wallet_secret);

        // Logging
        Self::apply_env_parse("VG_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("VG_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("VG_LOG_FILE", &mut self.logging.file);

        // Ledger
        Self::apply_env_string("VG_LEDGER_RPC_URL", &mut self.ledger.rpc_url);
        Self::apply_env_option_string(
            "VG_LEDGER_ADMIN_PRIVATE_KEY",
            &mut self.ledger.admin_private_key,
        );
        Self::apply_env_string("VG_LEDGER_PACKAGE_ID", &mut self.ledger.package_id);
        Self::apply_env_string("VG_LEDGER_MODULE", &mut self.ledger.module);
        Self::apply_env_option_string("VG_LEDGER_ADMIN_CAP_ID", &mut self.ledger.admin_cap_id);
        Self::apply_env_parse("VG_LEDGER_GAS_BUDGET", &mut self.ledger.gas_budget);
        Self::apply_env_parse(
            "VG_LEDGER_FEE_ALLOWANCE_MIST",
            &mut self.ledger.fee_allowance_mist,
        );
        Self::apply_env_parse(
            "VG_LEDGER_REQUEST_TIMEOUT_SECS",
            &mut self.ledger.request_timeout_secs,
        );

        // Admin
        Self::apply_env_option_string("VG_ADMIN_API_KEY", &mut self.admin.api_key);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values.
    /// An empty value clears the option.
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = (!val.is_empty()).then_some(val);
        }
    }
}

fn presence(set: bool) -> &'static str {
    if set { "set" } else { "missing" }
}
