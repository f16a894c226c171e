mod admin_config;
mod auth_config;
mod config;
mod database_config;
mod error;
mod ledger_config;
mod log_level;
mod logging_config;
mod server_config;

pub use admin_config::AdminConfig;
pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use ledger_config::LedgerConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

#[cfg(test)]
mod tests;

/// Environment variable naming the config directory
pub const CONFIG_DIR_ENV: &str = "VG_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".vg";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "voting.db";

const DEFAULT_SESSION_TTL_SECS: u64 = 3600;
const MIN_SESSION_TTL_SECS: u64 = 60;
const MAX_SESSION_TTL_SECS: u64 = 86_400;
const MIN_JWT_SECRET_LENGTH: usize = 32;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const DEFAULT_RPC_URL: &str = "https://fullnode.testnet.sui.io:443";
const DEFAULT_LEDGER_MODULE: &str = "voting";
const DEFAULT_ISSUE_FUNCTION: &str = "issue_ticket";
const DEFAULT_VOTE_FUNCTION: &str = "cast_vote";
const DEFAULT_GAS_BUDGET: u64 = 10_000_000;
const MAX_GAS_BUDGET: u64 = 50_000_000_000;
const DEFAULT_FEE_ALLOWANCE_MIST: u64 = 0;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
