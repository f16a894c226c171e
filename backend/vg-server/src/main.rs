use vg_server::{AppState, build_router, error::ServerError, logger};

use vg_auth::{CredentialService, SessionIssuer};
use vg_config::{Config, ConfigError};
use vg_ledger::{Ledger, SuiLedger};

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A .env file is optional; real environment variables win
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path = if let Some(ref filename) = config.logging.file {
        let log_dir = config.log_dir()?;
        std::fs::create_dir_all(&log_dir)?;
        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting vg-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool (migrations run on open)
    let database_path = config.database_path()?;
    info!("Opening database: {}", database_path.display());
    let pool = vg_db::open_pool(&database_path).await?;

    // Session issuer and credential service
    let jwt_secret = config
        .auth
        .jwt_secret
        .as_deref()
        .ok_or_else(|| ConfigError::auth("jwt_secret is required"))?;
    let sessions = Arc::new(SessionIssuer::new(
        jwt_secret.as_bytes(),
        Duration::from_secs(config.auth.session_ttl_secs),
    ));

    let wallet_secret = config
        .auth
        .wallet_secret
        .clone()
        .ok_or_else(|| ConfigError::auth("wallet_secret is required"))?;
    let credentials = CredentialService::new(wallet_secret);

    // Ledger client (optional)
    let ledger: Option<Arc<dyn Ledger>> = match SuiLedger::from_config(&config.ledger)
        .map_err(ServerError::from)?
    {
        Some(sui) => {
            info!("Ledger: admin address {}", sui.admin_address());
            Some(Arc::new(sui))
        }
        None => {
            warn!("Ledger not configured - ticket issuance and vote sponsoring are disabled");
            None
        }
    };

    if config.admin.api_key.is_none() {
        warn!("admin.api_key not set - admin endpoints are UNPROTECTED");
    }

    // Build application state
    let app_state = AppState {
        pool,
        sessions,
        credentials,
        ledger,
        admin_api_key: config.admin.api_key.clone(),
    };

    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => {
                    error!("Failed to listen for SIGINT: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        })
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}
