mod api;

use crate::AppState;

use vg_auth::{CredentialService, SessionIssuer};

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub(crate) const TEST_JWT_SECRET: &[u8] = b"unit-test-jwt-secret-32-bytes-long!";

/// State over a single-connection in-memory database
pub(crate) async fn create_test_state(admin_api_key: Option<&str>) -> AppState {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid sqlite url")
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    vg_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    AppState {
        pool,
        sessions: Arc::new(SessionIssuer::new(
            TEST_JWT_SECRET,
            Duration::from_secs(3600),
        )),
        credentials: CredentialService::new("unit-test-wallet-secret"),
        ledger: None,
        admin_api_key: admin_api_key.map(str::to_string),
    }
}
