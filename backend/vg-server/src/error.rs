use thiserror::Error;

/// Startup failures
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] vg_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] vg_db::DbError),

    #[error("Ledger setup failed: {0}")]
    Ledger(#[from] vg_ledger::LedgerError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
